//! API documentation
//!
//! OpenAPI specification generation for the relay endpoints.

mod openapi;

pub use openapi::ApiDoc;
