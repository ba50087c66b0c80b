//! Error types for the cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache service.
///
/// `InvalidArgument` covers local precondition violations (zero
/// capacity, zero TTL, malformed keys) and is reported to the immediate
/// caller, never silently clamped.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Precondition violation on a caller-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Key absent or expired
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Client exceeded its request budget for the current window
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimited {
        /// Seconds until the window rolls over
        retry_after: u64,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            CacheError::InvalidArgument(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            CacheError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "error": self.to_string() }),
            ),
            CacheError::RateLimited { retry_after } => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": "Rate limit exceeded", "retry_after": retry_after }),
            ),
            CacheError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;
