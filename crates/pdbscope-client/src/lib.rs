//! # pdbscope-client
//!
//! HTTP client for the RCSB PDB services used by the pdbscope dashboard:
//! - entry metadata (`{data_api}/entry/{id}`)
//! - polymer-entity metadata (`{data_api}/polymer_entity/{id}/{n}`)
//! - structure files (`{files}/{id}.pdb`)
//!
//! [`RcsbClient`] implements [`pdbscope_core::StructureSource`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;

pub use client::RcsbClient;
pub use error::{Error, Result};
