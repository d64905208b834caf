//! Category assignment pipeline
//!
//! Issues one classification request per gallery image against the relay,
//! with all requests in flight concurrently. A failed call resolves to "no
//! category assigned" and never aborts the rest of the batch.

use futures::future::join_all;
use tracing::{info, warn};

use crate::{
    classify::{
        normalize::NormalizedResponse,
        sanitize::{match_category, CATEGORIES},
    },
    error::{AppError, AppResult},
    gallery::{Gallery, UploadedImage},
    relay::types::{CompletionRequest, ChatCompletionResponse, ContentItem, ImageUrl, Message},
};

/// Result of classifying one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationOutcome {
    pub filename: String,
    /// Allow-listed category, or None when the call failed or the answer
    /// didn't match
    pub category: Option<String>,
}

/// Client of the relay's completion endpoint
pub struct Classifier {
    client: reqwest::Client,
    relay_url: String,
    model: String,
}

impl Classifier {
    /// Create a classifier pointing at a running relay
    pub fn new(client: reqwest::Client, relay_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            relay_url: relay_url.into(),
            model: model.into(),
        }
    }

    fn build_request(&self, image: &UploadedImage) -> CompletionRequest {
        let prompt = format!(
            "Classify this image into exactly one of the following categories: {}. \
             Reply with only the category name.",
            CATEGORIES.join(", ")
        );

        CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentItem::Text { text: prompt },
                    ContentItem::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_url(),
                            detail: Some("low".to_string()),
                        },
                    },
                ],
            }],
            stream: false,
            enable_caching: false,
        }
    }

    /// Classify a single image, returning the normalized response
    ///
    /// HTTP-level failures are returned to the caller unchanged; batch-level
    /// tolerance lives in [`Classifier::classify_all`].
    pub async fn classify_image(&self, image: &UploadedImage) -> AppResult<NormalizedResponse> {
        let request = self.build_request(image);
        let url = format!("{}/api/processimage/complete-image", self.relay_url);

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(AppError::UpstreamStatus { status, body });
        }

        let upstream: ChatCompletionResponse = serde_json::from_slice(&body)?;
        Ok(NormalizedResponse::from_upstream(&upstream))
    }

    /// Classify every image in the gallery
    ///
    /// All calls are dispatched up front and joined once each has settled.
    /// Matched categories are written back to the gallery by filename.
    pub async fn classify_all(&self, gallery: &mut Gallery) -> Vec<ClassificationOutcome> {
        let calls = gallery.images().iter().map(|image| async move {
            let result = self.classify_image(image).await;
            (image.filename.clone(), result)
        });

        let settled = join_all(calls).await;

        let mut outcomes = Vec::with_capacity(settled.len());
        for (filename, result) in settled {
            let category = match result {
                Ok(response) => match match_category(response.text()) {
                    Some(category) => {
                        gallery.set_category(&filename, category);
                        Some(category.to_string())
                    }
                    None => {
                        warn!(
                            filename = %filename,
                            answer = %response.text(),
                            "Classification answer did not match any category"
                        );
                        None
                    }
                },
                Err(e) => {
                    warn!(filename = %filename, error = %e, "Classification call failed");
                    None
                }
            };
            outcomes.push(ClassificationOutcome { filename, category });
        }

        let assigned = outcomes.iter().filter(|o| o.category.is_some()).count();
        info!(
            total = outcomes.len(),
            assigned = assigned,
            "Classification batch settled"
        );

        outcomes
    }
}
