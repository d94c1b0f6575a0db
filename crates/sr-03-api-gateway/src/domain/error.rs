//! API Gateway error types with HTTP status mapping.
//!
//! | Source | Status |
//! |--------|--------|
//! | bad request body / path, malformed or stale challenge | 400 |
//! | invalid signature | 401 |
//! | unknown block | 404 |
//! | ledger append failure | 500 |

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sr_01_ledger::LedgerError;
use sr_02_ownership::OwnershipError;
use std::fmt;

/// API error rendered as `{"error": message}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: StatusCode,
    /// Error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Invalid request body or parameters
    pub fn bad_request(details: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, details)
    }

    /// Ownership could not be proven
    pub fn unauthorized(details: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, details)
    }

    /// Resource not found (block by hash or height)
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, resource)
    }

    /// Internal error
    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, details)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

// Conversions from common error types

impl From<OwnershipError> for ApiError {
    fn from(e: OwnershipError) -> Self {
        match e {
            OwnershipError::MalformedChallenge(_)
            | OwnershipError::ExpiredChallenge { .. }
            | OwnershipError::ChallengeFromFuture { .. } => ApiError::bad_request(e.to_string()),
            OwnershipError::InvalidSignature(_) => ApiError::unauthorized(e.to_string()),
            OwnershipError::Append(_) => ApiError::internal(e.to_string()),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(e: LedgerError) -> Self {
        ApiError::not_found(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::bad_request(e.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::bad_request(e.body_text())
    }
}

impl From<hex::FromHexError> for ApiError {
    fn from(e: hex::FromHexError) -> Self {
        ApiError::bad_request(format!("invalid block hash: {}", e))
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (not HTTP, internal use)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server task failed or panicked
    #[error("server error: {0}")]
    Server(String),

    /// Server already running
    #[error("gateway already started")]
    AlreadyStarted,
}
