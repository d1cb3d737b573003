//! Outreach domain: deterministic message composition.

mod composer;

pub use composer::compose_message;
