//! Client-side classification
//!
//! Response normalization, category sanitization, and the per-image
//! classification pipeline run against the relay.

pub mod normalize;
pub mod pipeline;
pub mod sanitize;

pub use normalize::{NormalizedResponse, NormalizedUsage};
pub use pipeline::{ClassificationOutcome, Classifier};
pub use sanitize::{match_category, sanitize_category, CATEGORIES};
