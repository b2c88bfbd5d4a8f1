//! # Item API Errors
//!
//! Every handler failure becomes an [`ApiError`]. Responses carry the message
//! as a plain-text body with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for item handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Item API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path segment is not an integer
    #[error("Invalid item ID")]
    InvalidId,

    /// Body is not valid JSON or lacks a required field
    #[error("{0}")]
    InvalidBody(String),

    /// No row with the requested id
    #[error("Item not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The store failed; its message is surfaced to the caller
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "store operation failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "rejected request");
        }

        (status, self.to_string()).into_response()
    }
}
