//! LeadRecord - the immutable prospect record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ConfidenceScore;

use super::{EmailStatus, IntentSignal, Seniority};

/// A prospect record with firmographic and behavioral attributes.
///
/// Records are created once at catalog load and never mutated. Wire names
/// are camelCase to match the established HTTP contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// Unique, stable key within the catalog.
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub employees: u32,
    pub seniority: Seniority,
    pub linkedin_url: String,
    /// Free-text events, most recent first.
    pub recent_activity: Vec<String>,
    /// Stack names observed for the account.
    pub technologies: Vec<String>,
    pub signals: Vec<IntentSignal>,
    /// Whether the account is visibly hiring. Intentionally independent of
    /// the `Hiring` member of `signals`; the two are never unified.
    pub hiring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_round: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<u64>,
    pub email_status: EmailStatus,
    pub confidence_score: ConfidenceScore,
}

impl LeadRecord {
    /// Returns true if the lead carries the given intent signal.
    pub fn has_signal(&self, signal: IntentSignal) -> bool {
        self.signals.contains(&signal)
    }
}
