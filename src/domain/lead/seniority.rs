//! Seniority enum for lead classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seniority band of a lead's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seniority {
    #[serde(rename = "C-Level")]
    CLevel,
    #[serde(rename = "VP")]
    Vp,
    Director,
    Manager,
    #[serde(rename = "Individual Contributor")]
    IndividualContributor,
}

impl Seniority {
    /// Returns all seniorities in canonical order.
    pub fn all() -> &'static [Seniority] {
        &[
            Seniority::CLevel,
            Seniority::Vp,
            Seniority::Director,
            Seniority::Manager,
            Seniority::IndividualContributor,
        ]
    }

    /// Parses the display name, returning `None` for unrecognized input.
    pub fn parse(value: &str) -> Option<Seniority> {
        Self::all()
            .iter()
            .find(|s| s.display_name() == value)
            .copied()
    }

    /// Returns the display name (also the JSON wire value).
    pub fn display_name(&self) -> &'static str {
        match self {
            Seniority::CLevel => "C-Level",
            Seniority::Vp => "VP",
            Seniority::Director => "Director",
            Seniority::Manager => "Manager",
            Seniority::IndividualContributor => "Individual Contributor",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
