//! Upstream relay layer
//!
//! Wire types, the backend seam, and the concrete Frida client used to
//! forward classification requests to the hosted completion API.

pub mod backend;
pub mod frida;
pub mod mapping;
pub mod types;

pub use backend::CompletionBackend;
pub use frida::FridaClient;
