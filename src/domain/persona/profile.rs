//! PersonaProfile - a messaging archetype for a lead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Messaging register for outreach copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Consultative,
    Challenger,
    Casual,
    Visionary,
}

impl Tone {
    /// Returns the display name (also the JSON wire value).
    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Consultative => "Consultative",
            Tone::Challenger => "Challenger",
            Tone::Casual => "Casual",
            Tone::Visionary => "Visionary",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A synthesized or operator-edited archetype describing how to message a
/// lead.
///
/// Free-standing value object: nothing ties it back to a lead after
/// creation, and the composer treats it as opaque input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    pub id: String,
    /// Archetype label, not the contact's own name.
    pub name: String,
    pub pain_points: Vec<String>,
    pub value_drivers: Vec<String>,
    pub tone: Tone,
    pub call_to_action: String,
}
