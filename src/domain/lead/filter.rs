//! The faceted lead filter and its pure search evaluator.
//!
//! Matching is a logical AND across dimensions with OR semantics inside a
//! dimension's selection set. An empty/default filter matches every
//! record, and evaluation preserves catalog order.

use serde::{Deserialize, Serialize};

use super::{IntentSignal, LeadRecord, Seniority};

/// Multi-dimensional selection criteria for narrowing the lead catalog.
///
/// Built per request and discarded after evaluation. Each selection set
/// imposes no constraint while empty; numeric bounds and the hiring
/// tri-state impose no constraint while `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadFilter {
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub seniorities: Vec<Seniority>,
    pub technologies: Vec<String>,
    pub signals: Vec<IntentSignal>,
    /// Tri-state: `Some(true)` requires hiring, `Some(false)` requires
    /// not hiring, `None` ignores the dimension.
    pub hiring: Option<bool>,
    pub min_employees: Option<u32>,
    pub max_employees: Option<u32>,
    pub min_confidence: Option<u8>,
    /// Case-insensitive substring over name, company, and title.
    pub query: String,
}

impl LeadFilter {
    /// Returns true if the record satisfies every filter dimension.
    pub fn matches(&self, lead: &LeadRecord) -> bool {
        self.matches_query(lead)
            && self.matches_selection_sets(lead)
            && self.matches_hiring(lead)
            && self.matches_bounds(lead)
    }

    fn matches_query(&self, lead: &LeadRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        lead.name.to_lowercase().contains(&needle)
            || lead.company.to_lowercase().contains(&needle)
            || lead.title.to_lowercase().contains(&needle)
    }

    fn matches_selection_sets(&self, lead: &LeadRecord) -> bool {
        let industry_ok =
            self.industries.is_empty() || self.industries.contains(&lead.industry);
        let location_ok =
            self.locations.is_empty() || self.locations.contains(&lead.location);
        let seniority_ok =
            self.seniorities.is_empty() || self.seniorities.contains(&lead.seniority);
        let technology_ok = self.technologies.is_empty()
            || lead
                .technologies
                .iter()
                .any(|tech| self.technologies.contains(tech));
        let signal_ok = self.signals.is_empty()
            || lead.signals.iter().any(|signal| self.signals.contains(signal));

        industry_ok && location_ok && seniority_ok && technology_ok && signal_ok
    }

    fn matches_hiring(&self, lead: &LeadRecord) -> bool {
        match self.hiring {
            None => true,
            Some(required) => lead.hiring == required,
        }
    }

    fn matches_bounds(&self, lead: &LeadRecord) -> bool {
        if let Some(min) = self.min_employees {
            if lead.employees < min {
                return false;
            }
        }
        if let Some(max) = self.max_employees {
            if lead.employees > max {
                return false;
            }
        }
        if let Some(min) = self.min_confidence {
            if lead.confidence_score.value() < min {
                return false;
            }
        }
        true
    }
}

/// Evaluates a filter over the catalog, preserving catalog order.
///
/// Never fails; an empty result set is a valid outcome.
pub fn search_leads<'a>(leads: &'a [LeadRecord], filter: &LeadFilter) -> Vec<&'a LeadRecord> {
    leads.iter().filter(|lead| filter.matches(lead)).collect()
}
