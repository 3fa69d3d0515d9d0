// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Every failure is rendered as a `{"error": "<message>"}` body with HTTP 200.
//! Clients distinguish outcomes by payload, never by status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
///
/// The `Display` text of each variant is exactly the message clients see.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field was missing or empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("your id must be valid")]
    InvalidId,

    #[error("duration must be integer")]
    InvalidDuration,

    /// A date input (`date`, `from`, `to`) could not be parsed.
    #[error("{0} must be a valid date")]
    InvalidDate(&'static str),

    /// A well-formed id that does not resolve to a stored user.
    #[error("unknown userId")]
    NotFound(String),

    #[error("No Exercises Found")]
    NoExercises,

    /// The request body or query string could not be decoded at all.
    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("internal Error: {0}")]
    Database(String),

    #[error("internal Error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this is a caller mistake rather than a service failure.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AppError::Database(_) | AppError::Internal(_))
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!(error = %self, "Rejected request");
        } else {
            tracing::error!(error = %self, "Internal server error");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
