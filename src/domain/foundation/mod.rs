//! Shared domain primitives.

mod confidence_score;
mod errors;

pub use confidence_score::ConfidenceScore;
pub use errors::ValidationError;
