//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `lead` - Lead records, the faceted filter engine, catalog metrics
//! - `persona` - Persona profiles and rule-based persona synthesis
//! - `outreach` - Outreach message composition

pub mod foundation;
pub mod lead;
pub mod outreach;
pub mod persona;
