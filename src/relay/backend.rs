//! Completion backend abstraction
//!
//! Defines the trait interface between the relay endpoint and the concrete
//! upstream client, so tests and future providers can plug in behind it.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::AppResult;
use crate::relay::types::CompletionRequest;

/// Trait defining the interface to an upstream completion service
///
/// Implementations handle communication with a specific hosted completion
/// API while the relay routes stay provider-agnostic.
///
/// # Contract
///
/// `complete` returns the upstream body verbatim on a 2xx status. A non-2xx
/// upstream status surfaces as [`crate::error::AppError::UpstreamStatus`]
/// carrying the original status and body, transport failures as
/// `UpstreamTransport`, and timeouts as `UpstreamTimeout`.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Get the backend name for logging
    fn name(&self) -> &'static str;

    /// Forward a completion request and return the upstream body unchanged
    async fn complete(&self, request: &CompletionRequest) -> AppResult<Bytes>;
}
