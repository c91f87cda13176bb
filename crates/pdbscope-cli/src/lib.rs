//! # pdbscope-cli
//!
//! Command-line front end for the pdbscope dashboard:
//! - `serve` runs the HTTP dashboard
//! - `summary` and `scene` run one lookup and print the result
//! - `config` manages the TOML configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction};
pub use error::{Error, Result};
