//! Common test utilities for Curator
//!
//! Shared test fixtures and helpers used across integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;

use curator::{routes, AppState, Config};

use crate::mocks::frida::MockFrida;

/// Test configuration constants
pub mod constants {
    /// Default test API key for the Frida upstream
    pub const TEST_FRIDA_API_KEY: &str = "test-frida-api-key";
}

/// Test harness: relay wired to a mock Frida upstream
pub struct TestApp {
    pub server: TestServer,
    pub frida: MockFrida,
}

impl TestApp {
    /// Create a harness with a configured API key
    pub async fn new() -> Self {
        Self::with_api_key(Some(constants::TEST_FRIDA_API_KEY)).await
    }

    /// Create a harness with no credential configured
    pub async fn unauthenticated() -> Self {
        Self::with_api_key(None).await
    }

    async fn with_api_key(api_key: Option<&str>) -> Self {
        let frida = MockFrida::start().await;

        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            frida_api_url: frida.uri(),
            frida_api_key: api_key.map(String::from),
        };

        let state = Arc::new(AppState::new(config).expect("Failed to create app state"));
        let server =
            TestServer::new(routes::create_router(state)).expect("Failed to create test server");

        Self { server, frida }
    }
}

/// Serve the relay on a real local port and return its base URL
///
/// Used by tests that drive the relay through a plain HTTP client (the
/// classification pipeline) rather than through TestServer.
pub async fn spawn_relay(frida_url: &str, api_key: Option<&str>) -> String {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        frida_api_url: frida_url.to_string(),
        frida_api_key: api_key.map(String::from),
    };

    let state = Arc::new(AppState::new(config).expect("Failed to create app state"));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test relay server failed");
    });

    format!("http://{}", addr)
}

/// Sample request data for tests
pub mod test_data {
    use serde_json::json;

    /// Valid classification request with one text part and one image part
    pub fn valid_classification_request() -> serde_json::Value {
        json!({
            "model": "gpt-4o-mini",
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "text",
                            "text": "Classify this image."
                        },
                        {
                            "type": "image_url",
                            "image_url": {
                                "url": "data:image/png;base64,aVZCT1J3MEtHZ28="
                            }
                        }
                    ]
                }
            ],
            "stream": false,
            "enable_caching": false
        })
    }
}
