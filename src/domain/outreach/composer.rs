//! Deterministic outreach message composition.
//!
//! Pure string templating: no network calls, no token limits, no
//! randomness. Byte-identical output for identical inputs.

use crate::domain::lead::LeadRecord;
use crate::domain::persona::PersonaProfile;

/// Composes the outreach narrative for a lead.
///
/// The narrative opens on the lead's company and its comma-joined intent
/// signals (the literal word "activity" when no signals exist), then
/// bridges to a value statement phrased around the lowercased title as an
/// audience descriptor. The offer, tone, and call to action are surfaced
/// to the caller as sibling fields, never concatenated into the
/// narrative, so the boundary can lay them out independently.
pub fn compose_message(lead: &LeadRecord, persona: &PersonaProfile, _offer: &str) -> String {
    let signal_summary = if lead.signals.is_empty() {
        "activity".to_string()
    } else {
        lead.signals
            .iter()
            .map(|signal| signal.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let audience = lead.title.to_lowercase();
    let first_pain_point = persona
        .pain_points
        .first()
        .map(String::as_str)
        .unwrap_or("pipeline pressure");

    format!(
        "Noticed {company} showing {signals} momentum on LinkedIn right now. \
         Teams in that window usually tell us: \"{pain}.\" \
         We help {audience}s accelerate pipeline generation by turning those \
         live signals into persona-led outreach plays.",
        company = lead.company,
        signals = signal_summary,
        pain = first_pain_point,
        audience = audience,
    )
}
