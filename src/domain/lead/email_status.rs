//! Email verification status for a lead's contact address.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deliverability status of the lead's email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailStatus {
    Verified,
    Guessed,
    Unavailable,
}

impl EmailStatus {
    /// Returns the display name (also the JSON wire value).
    pub fn display_name(&self) -> &'static str {
        match self {
            EmailStatus::Verified => "Verified",
            EmailStatus::Guessed => "Guessed",
            EmailStatus::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_display_name() {
        assert_eq!(
            serde_json::to_string(&EmailStatus::Verified).unwrap(),
            "\"Verified\""
        );
    }

    #[test]
    fn deserialize_rejects_unknown_status() {
        assert!(serde_json::from_str::<EmailStatus>("\"Bounced\"").is_err());
    }
}
