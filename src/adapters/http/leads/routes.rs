//! Axum router configuration for lead query endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_lead_metrics, get_leads, LeadsAppState};

/// Create the lead query router.
///
/// # Routes
/// - `GET /` - Faceted lead search (full catalog when unfiltered)
/// - `GET /metrics` - Summary metrics over the filtered result set
pub fn leads_router() -> Router<LeadsAppState> {
    Router::new()
        .route("/", get(get_leads))
        .route("/metrics", get(get_lead_metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryLeadCatalog;
    use std::sync::Arc;

    #[test]
    fn leads_router_creates_router() {
        let router = leads_router();
        let state = LeadsAppState {
            catalog: Arc::new(InMemoryLeadCatalog::seeded()),
        };
        let _: Router<()> = router.with_state(state);
    }
}
