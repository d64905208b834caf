//! Configuration management for Curator
//!
//! Configuration is loaded from environment variables; a `.env` file is picked
//! up by dotenvy before the process environment is read.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Frida completion API base URL
    pub frida_api_url: String,
    /// Frida API key. Absent means requests go out unauthenticated.
    pub frida_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("CURATOR_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("CURATOR_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid CURATOR_PORT")?,

            frida_api_url: env::var("FRIDA_API_URL")
                .unwrap_or_else(|_| "https://frida-llm-api.azurewebsites.net/v1".to_string()),
            frida_api_key: env::var("FRIDA_API_KEY").ok(),
        })
    }
}
