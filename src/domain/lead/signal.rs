//! Intent signals - discrete behavioral indicators attached to a lead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A behavioral buying indicator observed for a lead.
///
/// The `Hiring` signal is independent of the `hiring` boolean on
/// `LeadRecord`; a record may carry either without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentSignal {
    Hiring,
    Funding,
    #[serde(rename = "Content Engagement")]
    ContentEngagement,
    #[serde(rename = "Job Change")]
    JobChange,
    #[serde(rename = "Technology Adoption")]
    TechnologyAdoption,
}

impl IntentSignal {
    /// Returns all signals in canonical order.
    pub fn all() -> &'static [IntentSignal] {
        &[
            IntentSignal::Hiring,
            IntentSignal::Funding,
            IntentSignal::ContentEngagement,
            IntentSignal::JobChange,
            IntentSignal::TechnologyAdoption,
        ]
    }

    /// Parses the display name, returning `None` for unrecognized input.
    pub fn parse(value: &str) -> Option<IntentSignal> {
        Self::all()
            .iter()
            .find(|s| s.display_name() == value)
            .copied()
    }

    /// Returns the display name (also the JSON wire value).
    pub fn display_name(&self) -> &'static str {
        match self {
            IntentSignal::Hiring => "Hiring",
            IntentSignal::Funding => "Funding",
            IntentSignal::ContentEngagement => "Content Engagement",
            IntentSignal::JobChange => "Job Change",
            IntentSignal::TechnologyAdoption => "Technology Adoption",
        }
    }
}

impl fmt::Display for IntentSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_5_signals() {
        assert_eq!(IntentSignal::all().len(), 5);
    }

    #[test]
    fn parse_round_trips_display_names() {
        for signal in IntentSignal::all() {
            assert_eq!(IntentSignal::parse(signal.display_name()), Some(*signal));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(IntentSignal::parse("Churn Risk"), None);
        assert_eq!(IntentSignal::parse("funding"), None);
    }

    #[test]
    fn serializes_multi_word_names_with_spaces() {
        let json = serde_json::to_string(&IntentSignal::ContentEngagement).unwrap();
        assert_eq!(json, "\"Content Engagement\"");
        let json = serde_json::to_string(&IntentSignal::JobChange).unwrap();
        assert_eq!(json, "\"Job Change\"");
    }
}
