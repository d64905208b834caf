//! Upstream response normalization
//!
//! Converts the upstream `choices[0].message.content` completion shape into
//! the simplified message shape the client consumes. The mapping is total:
//! every missing upstream field falls back to a default, so a sparse or empty
//! body still normalizes.

use serde::{Deserialize, Serialize};

use crate::relay::types::ChatCompletionResponse;

/// Stop reason used when the upstream omits `finish_reason`
pub const DEFAULT_STOP_REASON: &str = "end_turn";

/// Token usage in the normalized shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NormalizedUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// A single text block in the normalized response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedContent {
    /// Block type (always "text")
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Client-facing message shape produced from an upstream completion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedResponse {
    pub id: String,
    /// Object type (always "message")
    #[serde(rename = "type")]
    pub kind: String,
    /// Author role (always "assistant")
    pub role: String,
    /// Exactly one text block, built from `choices[0]`
    pub content: Vec<NormalizedContent>,
    pub model: String,
    pub stop_reason: String,
    pub usage: NormalizedUsage,
}

impl NormalizedResponse {
    /// Normalize an upstream completion response
    pub fn from_upstream(response: &ChatCompletionResponse) -> Self {
        let first_choice = response.choices.first();

        let text = first_choice
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        let stop_reason = first_choice
            .and_then(|choice| choice.finish_reason.clone())
            .unwrap_or_else(|| DEFAULT_STOP_REASON.to_string());

        let usage = response
            .usage
            .as_ref()
            .map(|usage| NormalizedUsage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
            })
            .unwrap_or_default();

        Self {
            id: response.id.clone(),
            kind: "message".to_string(),
            role: "assistant".to_string(),
            content: vec![NormalizedContent {
                kind: "text".to_string(),
                text,
            }],
            model: response.model.clone(),
            stop_reason,
            usage,
        }
    }

    /// Text of the single content block
    pub fn text(&self) -> &str {
        self.content
            .first()
            .map(|block| block.text.as_str())
            .unwrap_or("")
    }
}
