//! Frida completion API client
//!
//! Handles request forwarding to the hosted Frida LLM service. The client
//! attaches a bearer credential when one is configured and otherwise sends the
//! request unauthenticated, leaving authentication failures to the upstream.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    relay::{backend::CompletionBackend, types::CompletionRequest},
};

/// Frida LLM API client
pub struct FridaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl FridaClient {
    /// Create a new Frida client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        if config.frida_api_key.is_none() {
            warn!("FRIDA_API_KEY is not set; upstream requests will be unauthenticated");
        }
        Self {
            client,
            base_url: config.frida_api_url.clone(),
            api_key: config.frida_api_key.clone(),
        }
    }

    /// Check if the client is configured with an API key
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl CompletionBackend for FridaClient {
    fn name(&self) -> &'static str {
        "frida"
    }

    async fn complete(&self, request: &CompletionRequest) -> AppResult<Bytes> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut builder = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(url = %url, status = %status, body_len = body.len(), "Received upstream response");

        if !status.is_success() {
            return Err(AppError::UpstreamStatus { status, body });
        }

        Ok(body)
    }
}
