//! Error types for pdbscope-api

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for pdbscope-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while starting or running the server
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from pdbscope-core
    #[error("Core error: {0}")]
    Core(#[from] pdbscope_core::Error),

    /// Error from pdbscope-client
    #[error("Client error: {0}")]
    Client(#[from] pdbscope_client::Error),

    /// Binding or serving failed
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A request-level failure rendered as a JSON error body.
///
/// Body shape: `{"error":{"category":"...","message":"..."}}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    category: &'static str,
    message: String,
}

impl ApiError {
    /// An error with an explicit status and category.
    pub fn new(status: StatusCode, category: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            category,
            message: message.into(),
        }
    }

    /// The HTTP status this error responds with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<pdbscope_core::Error> for ApiError {
    fn from(err: pdbscope_core::Error) -> Self {
        use pdbscope_core::Error as Core;

        let status = match &err {
            Core::EmptyIdentifier => StatusCode::BAD_REQUEST,
            Core::UpstreamStatus { status: 404, .. } => StatusCode::NOT_FOUND,
            Core::Upstream { .. } | Core::UpstreamStatus { .. } | Core::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let category = if status == StatusCode::NOT_FOUND {
            "not_found"
        } else {
            err.category()
        };
        Self::new(status, category, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::warn!(status = %self.status, category = self.category, "{}", self.message);
        }
        let body = serde_json::json!({
            "error": {
                "category": self.category,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (pdbscope_core::Error::EmptyIdentifier, StatusCode::BAD_REQUEST),
            (pdbscope_core::Error::status("entry", 404), StatusCode::NOT_FOUND),
            (pdbscope_core::Error::status("entry", 500), StatusCode::BAD_GATEWAY),
            (pdbscope_core::Error::upstream("reset"), StatusCode::BAD_GATEWAY),
            (pdbscope_core::Error::config("bad"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_not_found_category() {
        let err = ApiError::from(pdbscope_core::Error::status("entry", 404));
        assert_eq!(err.category, "not_found");
        let err = ApiError::from(pdbscope_core::Error::upstream("dns"));
        assert_eq!(err.category, "upstream");
    }

    #[test]
    fn test_into_response_status() {
        let resp = ApiError::new(StatusCode::NOT_FOUND, "not_found", "missing").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
