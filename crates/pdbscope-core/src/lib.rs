#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! pdbscope Core
//!
//! Identifier handling, summary extraction, scene construction and the
//! render pipeline for the pdbscope dashboard. This crate makes no network
//! calls of its own; it talks to the outside world through
//! [`StructureSource`].

pub mod config;
pub mod dashboard;
pub mod error;
pub mod ids;
mod proptests;
pub mod scene;
pub mod source;
pub mod summary;

// Re-exports for convenience
pub use config::{ConfigManager, PdbScopeConfig};
pub use dashboard::{Dashboard, DashboardView, Report, SceneOutcome};
pub use error::{Error, Result};
pub use ids::PdbId;
pub use scene::{Annotations, SceneDescription, Viewport};
pub use source::{Canned, Fetched, FixtureSource, StructureSource};
pub use summary::{PLACEHOLDER, ProteinSummary};
