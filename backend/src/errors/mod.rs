//! Global application error types and handlers.
//!
//! This module defines the application-level error type used across the
//! backend and converts it into consistent JSON error responses. Every error
//! surfaced to a client has the shape `{ "error": <kind>, "message": <text> }`;
//! internal detail (verification errors, stack traces, raw tokens) never
//! reaches the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request carries no valid authentication.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authentication succeeded but access is denied.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Request payload failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", message)
            }
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, "Forbidden", message),
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, "Bad Request", message),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", message)
            }
        };
        let body = serde_json::json!({
            "error": kind,
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}
