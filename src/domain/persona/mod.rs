//! Persona domain: contact archetypes and rule-based synthesis.

mod profile;
mod synthesizer;

pub use profile::{PersonaProfile, Tone};
pub use synthesizer::{derive_persona, persona_id_for, DEFAULT_CALL_TO_ACTION};
