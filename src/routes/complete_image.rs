//! Image completion relay endpoint
//!
//! Accepts the client-shaped classification payload, forwards it to the
//! upstream completion API, and returns the upstream body verbatim. All shape
//! normalization happens on the client side.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{
    error::AppError,
    relay::types::CompletionRequest,
    AppState,
};

/// Handle image completion relay requests
///
/// Rejects an empty body before touching the upstream; otherwise the upstream
/// reply (success or error) is returned with its original status and body.
#[utoipa::path(
    post,
    path = "/api/processimage/complete-image",
    request_body = CompletionRequest,
    responses(
        (status = 200, description = "Upstream completion body, returned verbatim"),
        (status = 400, description = "Missing or invalid request body", body = crate::error::ErrorResponse),
        (status = 502, description = "Upstream transport failure", body = crate::error::ErrorResponse),
        (status = 504, description = "Upstream request timed out", body = crate::error::ErrorResponse),
    ),
    tag = "relay"
)]
pub async fn complete_image(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let start_time = Instant::now();

    if body.is_empty() {
        return Err(AppError::BadRequest("Request body is required.".to_string()));
    }

    let request: CompletionRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    info!(
        model = %request.model,
        messages = %request.messages.len(),
        stream = %request.stream,
        backend = %state.backend.name(),
        "Forwarding completion request"
    );

    let upstream_body = state.backend.complete(&request).await?;

    info!(
        model = %request.model,
        duration_ms = %format!("{:.2}", start_time.elapsed().as_secs_f64() * 1000.0),
        "Completion request relayed"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        upstream_body,
    )
        .into_response())
}
