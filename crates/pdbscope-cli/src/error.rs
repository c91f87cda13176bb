//! Error types for pdbscope-cli

use thiserror::Error;

/// Result type alias for pdbscope-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pdbscope-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from pdbscope-core
    #[error("{0}")]
    Core(#[from] pdbscope_core::Error),

    /// Error from pdbscope-client
    #[error("{0}")]
    Client(#[from] pdbscope_client::Error),

    /// Error from pdbscope-api
    #[error("{0}")]
    Api(#[from] pdbscope_api::Error),

    /// Output could not be serialized
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// No identifier was given on the command line
    #[error("{}", pdbscope_api::render::PROMPT)]
    MissingIdentifier,

    /// The file server has no structure for the identifier
    #[error("No structure file available for {pdb_id} (HTTP {status})")]
    NoStructure {
        /// Identifier that was looked up
        pdb_id: String,
        /// Status returned by the file server
        status: u16,
    },
}
