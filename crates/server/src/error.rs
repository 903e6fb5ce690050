//! Unified error handling for the server.
//!
//! Provides a single error type that maps to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use data::DataError;

/// Application error type with HTTP response mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Backing file missing, unreadable or malformed (500).
    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] DataError),

    /// No route matches the request (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A blocking read task panicked or was cancelled (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DataUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::DataUnavailable(ref e) => {
                tracing::error!(path = %e.path().display(), error = %e, "serving data failed");
            }
            AppError::Internal(ref msg) => tracing::error!(error = %msg, "internal error"),
            AppError::NotFound(_) => {}
        }

        let body = axum::Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
