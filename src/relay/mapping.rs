//! Flattening of multimodal messages into single-string completion messages
//!
//! Converts the image+text message shape into the shorter completion format
//! some upstreams expect: one string per message, with image references
//! rendered as `[Image: url]` placeholders. The relay endpoint forwards the
//! multimodal shape untouched; this mapping is available for callers that
//! need the flat form.

use serde::{Deserialize, Serialize};

use crate::relay::types::{ContentItem, Message};

/// A message whose content has been flattened to a single string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatMessage {
    pub role: String,
    pub content: String,
}

/// Flatten a content item to its string form
///
/// Text items yield their text; image items yield an `[Image: url]`
/// placeholder. Items with blank text yield `None` and are dropped from the
/// joined message.
fn flatten_item(item: &ContentItem) -> Option<String> {
    match item {
        ContentItem::Text { text } => {
            if text.trim().is_empty() {
                None
            } else {
                Some(text.clone())
            }
        }
        ContentItem::ImageUrl { image_url } => Some(format!("[Image: {}]", image_url.url)),
    }
}

/// Join a message's content items into one string, space-separated
pub fn flatten_content(items: &[ContentItem]) -> String {
    items
        .iter()
        .filter_map(flatten_item)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten messages into the single-string completion format
///
/// A message whose joined content is blank is omitted entirely.
pub fn flatten_messages(messages: &[Message]) -> Vec<FlatMessage> {
    messages
        .iter()
        .filter_map(|message| {
            let content = flatten_content(&message.content);
            if content.trim().is_empty() {
                None
            } else {
                Some(FlatMessage {
                    role: message.role.clone(),
                    content,
                })
            }
        })
        .collect()
}
