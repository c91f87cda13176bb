//! # pdbscope-api
//!
//! HTTP server for the pdbscope protein dashboard.
//!
//! This crate provides:
//! - The dashboard page at `/`, with the 3D viewer and structure summary
//! - JSON endpoints for the summary and the scene description
//! - Request tracing middleware and JSON error responses

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod server;

pub use error::{ApiError, Error, Result};
pub use routes::{AppState, HealthResponse, router};
pub use server::Server;
