//! OpenAPI specification for the relay API
//!
//! Aggregates the relay endpoints and schemas into a single OpenAPI document.

use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorResponse};
use crate::relay::types::{CompletionRequest, ContentItem, ImageUrl, Message};

/// OpenAPI specification for the Curator relay API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Curator Relay API",
        version = "1.0.0",
        description = "Relay for image classification requests against a hosted LLM completion API"
    ),
    paths(
        crate::routes::complete_image::complete_image,
        crate::routes::health::health_check,
        crate::routes::health::liveness_check,
    ),
    components(
        schemas(
            ImageUrl,
            ContentItem,
            Message,
            CompletionRequest,
            ErrorBody,
            ErrorResponse,
        )
    ),
    tags(
        (name = "relay", description = "Completion relay endpoints"),
        (name = "health", description = "Health and liveness probes")
    )
)]
pub struct ApiDoc;
