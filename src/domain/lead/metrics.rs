//! Result-set metrics for the dashboard's summary cards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::LeadRecord;

/// Aggregate view of a (filtered) set of leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    /// Number of leads in the set.
    pub total: usize,
    /// Mean confidence score, rounded to the nearest integer; 0 for an
    /// empty set.
    pub average_confidence: u8,
    /// Leads with the hiring flag set.
    pub hiring_count: usize,
    /// Most frequent industry, ties broken by first occurrence.
    pub top_industry: Option<String>,
}

/// Computes summary metrics over a set of leads.
///
/// Pure aggregation; the input order only influences tie-breaking for
/// the dominant industry.
pub fn summarize(leads: &[&LeadRecord]) -> CatalogSummary {
    let total = leads.len();

    let average_confidence = if total == 0 {
        0
    } else {
        let sum: u32 = leads
            .iter()
            .map(|lead| u32::from(lead.confidence_score.value()))
            .sum();
        // Round half-up, same as the dashboard's Math.round.
        ((sum + (total as u32 / 2)) / total as u32) as u8
    };

    let hiring_count = leads.iter().filter(|lead| lead.hiring).count();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for lead in leads {
        *counts.entry(lead.industry.as_str()).or_insert(0) += 1;
    }
    // max_by_key keeps the last maximum, so reverse to prefer the first
    // occurrence on ties.
    let top_industry = leads
        .iter()
        .rev()
        .map(|lead| lead.industry.as_str())
        .max_by_key(|industry| counts[industry])
        .map(str::to_string);

    CatalogSummary {
        total,
        average_confidence,
        hiring_count,
        top_industry,
    }
}
