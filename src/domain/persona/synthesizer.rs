//! Rule-based persona synthesis.
//!
//! Deterministic, pure, and total: every valid lead yields a persona, and
//! re-derivation for the same lead is idempotent.

use crate::domain::lead::{LeadRecord, Seniority};

use super::{PersonaProfile, Tone};

/// Default call to action applied unless the operator overrides it.
pub const DEFAULT_CALL_TO_ACTION: &str = "30 minute working session";

/// Fixed pain-point catalog. Deliberately generic rather than
/// lead-specific; downstream copy and tests depend on the literal text.
const PAIN_POINTS: &[&str] = &[
    "Hard to prioritize high-intent accounts with only firmographics",
    "Manual personalization cannot keep up with pipeline targets",
    "Need faster coaching loops for outbound reps",
];

/// Fixed value-driver catalog, same caveat as `PAIN_POINTS`.
const VALUE_DRIVERS: &[&str] = &[
    "Actionable scoring layer using live LinkedIn intent signals",
    "Dynamic outreach snippets tailored to roles and signals",
    "Workflow insights that de-risk expansion plays",
];

/// Returns the deterministic persona id for a lead id.
pub fn persona_id_for(lead_id: &str) -> String {
    format!("persona-{lead_id}")
}

/// Derives a default persona from a lead's attributes.
///
/// Tone is `Visionary` for C-Level leads and `Consultative` otherwise;
/// `Challenger` and `Casual` are only reachable through operator edits.
/// The persona name is the last two whitespace-separated tokens of the
/// lead's title (the whole title if it has fewer than two). This is a
/// deliberate heuristic; do not substitute the contact's own name.
pub fn derive_persona(lead: &LeadRecord) -> PersonaProfile {
    let tone = if lead.seniority == Seniority::CLevel {
        Tone::Visionary
    } else {
        Tone::Consultative
    };

    PersonaProfile {
        id: persona_id_for(&lead.id),
        name: persona_name(&lead.title),
        pain_points: PAIN_POINTS.iter().map(|s| s.to_string()).collect(),
        value_drivers: VALUE_DRIVERS.iter().map(|s| s.to_string()).collect(),
        tone,
        call_to_action: DEFAULT_CALL_TO_ACTION.to_string(),
    }
}

fn persona_name(title: &str) -> String {
    let tokens: Vec<&str> = title.split_whitespace().collect();
    if tokens.len() < 2 {
        title.to_string()
    } else {
        tokens[tokens.len() - 2..].join(" ")
    }
}
