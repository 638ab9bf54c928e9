//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for the API. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes. Absent ids on the read path are not
//! errors (they resolve to an empty result); these variants cover the write
//! path and request validation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A write addressed a record that does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The query document was malformed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A required field was missing or blank (422).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let detail = ApiErrorDetail {
            code: code.to_string(),
            message: self.to_string(),
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<peoplecars_store::StoreError> for ApiError {
    fn from(err: peoplecars_store::StoreError) -> Self {
        match &err {
            peoplecars_store::StoreError::PersonNotFound(_)
            | peoplecars_store::StoreError::CarNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
