//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter (DTOs, handlers, routes).

pub mod leads;
pub mod outreach;

use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

pub use leads::{leads_router, LeadsAppState};
pub use outreach::{outreach_router, OutreachAppState};

/// Standard error payload returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error.into(),
        }
    }
}

/// Liveness probe.
async fn health() -> &'static str {
    "ok"
}

/// Assembles the complete API router.
pub fn api_router(leads_state: LeadsAppState, outreach_state: OutreachAppState) -> Router {
    Router::new()
        .nest("/api/leads", leads::leads_router().with_state(leads_state))
        .nest(
            "/api/outreach",
            outreach::outreach_router().with_state(outreach_state),
        )
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryLeadCatalog;
    use std::sync::Arc;

    #[test]
    fn api_router_assembles_without_panic() {
        let catalog = Arc::new(InMemoryLeadCatalog::seeded());
        let _router = api_router(
            LeadsAppState {
                catalog: catalog.clone(),
            },
            OutreachAppState { catalog },
        );
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let body = ErrorResponse::new("LEAD_NOT_FOUND", "Lead 'x' not found");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["code"], "LEAD_NOT_FOUND");
        assert_eq!(value["error"], "Lead 'x' not found");
    }
}
