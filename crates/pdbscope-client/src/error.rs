//! Error types for pdbscope-client

use thiserror::Error;

/// Result type alias for pdbscope-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pdbscope-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from pdbscope-core
    #[error("Core error: {0}")]
    Core(#[from] pdbscope_core::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured base URL cannot have path segments appended to it.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

impl From<Error> for pdbscope_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(inner) => inner,
            Error::Http(e) => {
                let message = match e.url() {
                    Some(url) => format!("GET {url} failed: {e}"),
                    None => e.to_string(),
                };
                pdbscope_core::Error::upstream_with_source(message, e)
            }
            Error::InvalidBaseUrl { url, reason } => {
                pdbscope_core::Error::config(format!("invalid base URL '{url}': {reason}"))
            }
        }
    }
}
