//! Axum router configuration for outreach endpoints.

use axum::{routing::post, Router};

use super::handlers::{compose_outreach, OutreachAppState};

/// Create the outreach router.
///
/// # Routes
/// - `POST /` - Compose a persona-driven outreach message for one lead
pub fn outreach_router() -> Router<OutreachAppState> {
    Router::new().route("/", post(compose_outreach))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryLeadCatalog;
    use std::sync::Arc;

    #[test]
    fn outreach_router_creates_router() {
        let router = outreach_router();
        let state = OutreachAppState {
            catalog: Arc::new(InMemoryLeadCatalog::seeded()),
        };
        let _: Router<()> = router.with_state(state);
    }
}
