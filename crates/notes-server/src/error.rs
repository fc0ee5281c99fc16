//! API error types with JSON responses.
//!
//! Validation problems become 400, missing notes 404, and everything else a
//! 500 whose detail is logged but never sent to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_core::ValidationError;
use notes_store::StoreError;
use serde::{Deserialize, Serialize};

/// Message returned for any note that does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Note not found";

/// Message returned when the store fails.
pub const STORE_FAILURE_MESSAGE: &str = "Server error";

/// Message returned by the generic fallback for anything else.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400), e.g. a body that is not JSON.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Input failed validation (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(StoreError::NoteNotFound(_)) => "NOT_FOUND",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(StoreError::NoteNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Server-side failures are reduced to a fixed
    /// string.
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Validation(e) => e.to_string(),
            Self::NotFound(_) | Self::Store(StoreError::NoteNotFound(_)) => {
                NOT_FOUND_MESSAGE.to_string()
            }
            Self::Store(_) => STORE_FAILURE_MESSAGE.to_string(),
            Self::Internal(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
    /// Error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "Request failed");
        } else {
            tracing::debug!(error = %self, code = self.code(), "Request rejected");
        }

        let body = ErrorResponse {
            message: self.public_message(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
