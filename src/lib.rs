//! Curator - image classification relay and gallery client
//!
//! This library provides a relay server that forwards image classification
//! requests to a hosted LLM completion API, plus the client-side pieces: an
//! in-memory image gallery, a response normalizer, and a concurrent
//! classification pipeline.

pub mod classify;
pub mod config;
pub mod docs;
pub mod error;
pub mod gallery;
pub mod relay;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::classify::{ClassificationOutcome, Classifier};
pub use crate::config::Config;
pub use crate::gallery::{Gallery, UploadedImage};
pub use crate::relay::{CompletionBackend, FridaClient};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Upstream completion backend the relay forwards to
    pub backend: Arc<dyn CompletionBackend>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Pooled HTTP client shared with the upstream backend
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(std::time::Duration::from_secs(100))
            .build()?;

        let backend: Arc<dyn CompletionBackend> =
            Arc::new(FridaClient::new(http_client, &config));

        Ok(Self {
            config,
            start_time: Instant::now(),
            backend,
        })
    }
}
