//! Mock Frida completion API for testing
//!
//! Provides wiremock-based mocks for the upstream completion endpoint:
//! - POST /chat/completions - Chat completions (non-streaming)
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::frida::{FridaTestData, MockFrida};
//!
//! #[tokio::test]
//! async fn test_with_frida_mock() {
//!     let mock = MockFrida::start().await;
//!     mock.mock_completion_with_content("Food").await;
//!     // Use mock.uri() as the Frida API URL
//! }
//! ```

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_string_contains, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Frida API server wrapper
pub struct MockFrida {
    server: MockServer,
}

impl MockFrida {
    /// Start a new mock Frida server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful completion whose assistant message is `content`
    pub async fn mock_completion_with_content(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(FridaTestData::simple_response(content)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a successful completion for requests whose body contains `marker`
    ///
    /// Lets a single mock server answer differently per image payload.
    pub async fn mock_completion_for_payload(&self, marker: &str, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains(marker))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(FridaTestData::simple_response(content)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock an upstream error for requests whose body contains `marker`
    pub async fn mock_error_for_payload(&self, marker: &str, status: u16) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains(marker))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({"error": "upstream failure"})),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock 429 Rate Limited with a fixed body
    pub async fn mock_rate_limited(&self) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({"error": "rate limited"})),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock 500 Internal Server Error
    pub async fn mock_server_error(&self) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"error": "internal server error"})),
            )
            .mount(&self.server)
            .await;
    }

    /// Requests received by the mock so far
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Factory for upstream-shaped test data
pub struct FridaTestData;

impl FridaTestData {
    /// A complete upstream completion response with the given message content
    pub fn simple_response(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "created": 1706745600,
            "model": "gpt-4o-mini",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": {
                "prompt_tokens": 34,
                "completion_tokens": 2,
                "total_tokens": 36
            }
        })
    }
}
