//! Error types for lead catalog access.

use thiserror::Error;

/// Errors surfaced by the lead catalog.
///
/// The core search/derive/compose functions are total over valid inputs;
/// only catalog lookup and dataset loading can fail.
#[derive(Debug, Clone, Error)]
pub enum LeadError {
    /// Requested lead id is absent from the catalog. Propagates to the
    /// boundary undisguised, never silently substituted.
    #[error("Lead '{id}' not found")]
    NotFound { id: String },

    /// The dataset violated a load-time invariant or could not be read.
    #[error("Lead dataset fault: {reason}")]
    Dataset { reason: String },
}

impl LeadError {
    /// Creates a not found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        LeadError::NotFound { id: id.into() }
    }

    /// Creates a dataset fault.
    pub fn dataset(reason: impl Into<String>) -> Self {
        LeadError::Dataset {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let err = LeadError::not_found("lead-042");
        assert_eq!(err.to_string(), "Lead 'lead-042' not found");
    }

    #[test]
    fn dataset_carries_the_reason() {
        let err = LeadError::dataset("duplicate lead id 'lead-001'");
        assert_eq!(
            err.to_string(),
            "Lead dataset fault: duplicate lead id 'lead-001'"
        );
    }
}
