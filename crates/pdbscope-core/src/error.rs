//! Error types for pdbscope-core.

/// Errors that can occur while looking up or rendering a structure.
///
/// All variants are marked `#[non_exhaustive]` at the enum level so new
/// upstream failure kinds can be added without breaking callers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Transport failure talking to an upstream service (DNS, TLS, reset, ...).
    #[error("Upstream error: {message}")]
    Upstream {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Upstream answered, but not with a success status.
    #[error("{endpoint} returned HTTP {status}")]
    UpstreamStatus {
        /// Which endpoint answered (e.g. "entry", "structure file")
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// Response body was not the JSON we expected.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (config file reads and writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The identifier was empty after trimming.
    #[error("No PDB identifier given")]
    EmptyIdentifier,
}

/// Convenience `Result` type alias for pdbscope operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether retrying the same request could plausibly succeed.
    ///
    /// Nothing in pdbscope retries; the answer is recorded as the
    /// `retryable` field on degraded-lookup warnings.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Upstream { .. } => true,
            Error::UpstreamStatus { status, .. } => *status >= 500 || *status == 429,
            Error::Io(_) => true,
            Error::Decode(_) => false,
            Error::Config { .. } => false,
            Error::EmptyIdentifier => false,
        }
    }

    /// Creates a new upstream transport error with a message.
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Error::Upstream {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new upstream transport error with a message and source error.
    pub fn upstream_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Upstream {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new non-success status error.
    pub fn status<S: Into<String>>(endpoint: S, status: u16) -> Self {
        Error::UpstreamStatus {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Short category name used in API error bodies.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Upstream { .. } | Error::UpstreamStatus { .. } => "upstream",
            Error::Decode(_) => "decode",
            Error::Config { .. } => "configuration",
            Error::Io(_) => "io",
            Error::EmptyIdentifier => "validation",
        }
    }
}
