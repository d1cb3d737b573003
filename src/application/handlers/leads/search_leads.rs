//! SearchLeadsHandler - Query handler for faceted lead search.

use std::sync::Arc;

use crate::domain::lead::{search_leads, LeadError, LeadFilter, LeadRecord};
use crate::ports::LeadCatalog;

/// Query to search the catalog with a filter.
///
/// A default filter returns the full catalog in catalog order.
#[derive(Debug, Clone, Default)]
pub struct SearchLeadsQuery {
    pub filter: LeadFilter,
}

/// Handler for faceted lead search over the immutable catalog.
pub struct SearchLeadsHandler {
    catalog: Arc<dyn LeadCatalog>,
}

impl SearchLeadsHandler {
    pub fn new(catalog: Arc<dyn LeadCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: SearchLeadsQuery) -> Result<Vec<LeadRecord>, LeadError> {
        let leads = self.catalog.all().await?;
        let matches = search_leads(&leads, &query.filter)
            .into_iter()
            .cloned()
            .collect();
        Ok(matches)
    }
}
