//! HTTP routes for Curator
//!
//! This module defines all HTTP endpoints exposed by the relay.

pub mod complete_image;
pub mod docs;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Permissive CORS for the local-dev client/backend split. Not suitable
    // for production as-is.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/processimage/complete-image",
            post(complete_image::complete_image),
        )
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .merge(docs::create_docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
