//! Wire types for the completion relay
//!
//! Defines the client-facing classification request shape and the upstream
//! chat-completion response shape. Request types serialize with the upstream's
//! snake_case field names, omitting absent optional fields. Response types are
//! tolerant of missing fields so the client-side normalizer never faults on a
//! sparse upstream body.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Image URL reference for multimodal content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ImageUrl {
    /// URL of the image (data URL or HTTP URL)
    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub url: String,
    /// Image detail level requested from the model
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "auto")]
    pub detail: Option<String>,
}

/// A part of multimodal message content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// Text content
    Text {
        /// The text content
        text: String,
    },
    /// Image URL reference
    ImageUrl {
        /// The image URL details
        image_url: ImageUrl,
    },
}

/// A chat message with role and multimodal content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Message {
    /// The role of the message author
    #[schema(example = "user")]
    pub role: String,
    /// Ordered content items making up the message
    pub content: Vec<ContentItem>,
}

/// Classification request forwarded to the upstream completion API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CompletionRequest {
    /// Model identifier passed through to the upstream
    #[schema(example = "gpt-4o-mini")]
    pub model: String,
    /// Ordered conversation messages
    pub messages: Vec<Message>,
    /// Whether the upstream should stream the response
    #[serde(default)]
    pub stream: bool,
    /// Upstream-specific prompt caching flag
    #[serde(default)]
    pub enable_caching: bool,
}

/// Token usage counters reported by the upstream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Message inside a completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A single completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Upstream chat completion response (non-streaming)
///
/// Every field defaults so a partial body still deserializes; the normalizer
/// relies on this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}
