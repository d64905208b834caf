//! Error types for Curator
//!
//! This module defines custom error types used throughout the application.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream request failed: {0}")]
    UpstreamTransport(String),

    #[error("Upstream request timed out")]
    UpstreamTimeout,

    /// Non-success upstream status, relayed with the body exactly as received
    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: StatusCode, body: Bytes },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamTimeout
        } else {
            AppError::UpstreamTransport(err.to_string())
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "BAD_REQUEST")]
    pub code: String,
    #[schema(example = "Request body is required.")]
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Upstream application errors pass through untouched
            AppError::UpstreamStatus { status, body } => {
                return (status, [(header::CONTENT_TYPE, "application/json")], body)
                    .into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::UpstreamTransport(msg) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                format!("Upstream request failed: {}", msg),
            ),
            AppError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                "Upstream request timed out.".to_string(),
            ),
            AppError::Json(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_JSON",
                "Invalid JSON in request".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
