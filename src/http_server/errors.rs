//! # API Errors
//!
//! Error types for the JSON API.
//!
//! Validation failures carry the exact client-facing message and map to
//! 400. Store failures map to a generic 500 with a non-leaking message;
//! the detail goes to the operational log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing client input; never a server fault.
    #[error("{0}")]
    InvalidRequest(String),

    /// Store failure underneath a valid request.
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Error body: `{"status": "error", "message": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::InvalidRequest(message) => message.clone(),
            ApiError::Store(e) => {
                error!(error = %e, "store error while handling request");
                "internal server error".to_string()
            }
        };
        let body = ErrorBody {
            status: "error",
            message,
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_400() {
        let err = ApiError::InvalidRequest("Missing item ID".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing item ID");
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            status: "error",
            message: "Missing item or quantity".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Missing item or quantity");
    }
}
