//! SummarizeLeadsHandler - Query handler for result-set metrics.

use std::sync::Arc;

use crate::domain::lead::{search_leads, summarize, CatalogSummary, LeadError, LeadFilter};
use crate::ports::LeadCatalog;

/// Query to summarize the leads matching a filter.
#[derive(Debug, Clone, Default)]
pub struct SummarizeLeadsQuery {
    pub filter: LeadFilter,
}

/// Handler computing dashboard metrics over a filtered result set.
pub struct SummarizeLeadsHandler {
    catalog: Arc<dyn LeadCatalog>,
}

impl SummarizeLeadsHandler {
    pub fn new(catalog: Arc<dyn LeadCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: SummarizeLeadsQuery) -> Result<CatalogSummary, LeadError> {
        let leads = self.catalog.all().await?;
        let matches = search_leads(&leads, &query.filter);
        Ok(summarize(&matches))
    }
}
