//! In-memory lead catalog adapter.
//!
//! The dataset is loaded once at startup (either the seed embedded in
//! the binary or a JSON file from configuration), validated, and then
//! only ever read. All port calls operate on an immutable snapshot.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::lead::{LeadError, LeadRecord};
use crate::ports::LeadCatalog;

/// Seed dataset compiled into the binary.
const SEED_DATASET: &str = include_str!("../../../data/leads.json");

static SEED_LEADS: Lazy<Vec<LeadRecord>> = Lazy::new(|| {
    serde_json::from_str(SEED_DATASET).expect("embedded seed dataset must be valid")
});

/// Immutable lead catalog held in memory behind an `Arc`.
#[derive(Debug, Clone)]
pub struct InMemoryLeadCatalog {
    leads: Arc<[LeadRecord]>,
}

impl InMemoryLeadCatalog {
    /// Builds a catalog from records, validating load-time invariants.
    ///
    /// # Errors
    ///
    /// Returns `LeadError::Dataset` when two records share an id.
    /// Field-level invariants (score range, closed enums) are enforced
    /// earlier by deserialization.
    pub fn new(leads: Vec<LeadRecord>) -> Result<Self, LeadError> {
        let mut seen = HashSet::new();
        for lead in &leads {
            if !seen.insert(lead.id.as_str()) {
                return Err(LeadError::dataset(format!(
                    "duplicate lead id '{}'",
                    lead.id
                )));
            }
        }
        Ok(Self {
            leads: leads.into(),
        })
    }

    /// Builds the catalog from the embedded seed dataset.
    pub fn seeded() -> Self {
        Self::new(SEED_LEADS.clone()).expect("embedded seed dataset must satisfy invariants")
    }

    /// Loads a catalog from a JSON dataset file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LeadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LeadError::dataset(format!("cannot read dataset '{}': {e}", path.display()))
        })?;
        let leads: Vec<LeadRecord> = serde_json::from_str(&raw).map_err(|e| {
            LeadError::dataset(format!("malformed dataset '{}': {e}", path.display()))
        })?;
        Self::new(leads)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    /// Returns true when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

#[async_trait]
impl LeadCatalog for InMemoryLeadCatalog {
    async fn all(&self) -> Result<Vec<LeadRecord>, LeadError> {
        Ok(self.leads.to_vec())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LeadRecord>, LeadError> {
        Ok(self.leads.iter().find(|lead| lead.id == id).cloned())
    }
}
