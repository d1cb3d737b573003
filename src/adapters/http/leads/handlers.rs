//! HTTP handlers for the lead query endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::leads::{
    SearchLeadsHandler, SearchLeadsQuery, SummarizeLeadsHandler, SummarizeLeadsQuery,
};
use crate::domain::lead::LeadError;
use crate::ports::LeadCatalog;

use super::super::ErrorResponse;
use super::dto::{LeadMetricsResponse, LeadQueryParams, LeadsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the lead query boundary.
///
/// Cloned per request; the catalog is an Arc-wrapped immutable snapshot.
#[derive(Clone)]
pub struct LeadsAppState {
    pub catalog: Arc<dyn LeadCatalog>,
}

impl LeadsAppState {
    /// Create handlers on demand from the shared state.
    pub fn search_handler(&self) -> SearchLeadsHandler {
        SearchLeadsHandler::new(self.catalog.clone())
    }

    pub fn summarize_handler(&self) -> SummarizeLeadsHandler {
        SummarizeLeadsHandler::new(self.catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/leads - Search the catalog with faceted filters
pub async fn get_leads(
    State(state): State<LeadsAppState>,
    Query(params): Query<LeadQueryParams>,
) -> Result<impl IntoResponse, LeadsApiError> {
    let handler = state.search_handler();
    let query = SearchLeadsQuery {
        filter: params.into_filter(),
    };

    let leads = handler.handle(query).await?;

    tracing::debug!(matched = leads.len(), "lead search evaluated");
    Ok(Json(LeadsResponse { leads }))
}

/// GET /api/leads/metrics - Summary metrics over the filtered result set
pub async fn get_lead_metrics(
    State(state): State<LeadsAppState>,
    Query(params): Query<LeadQueryParams>,
) -> Result<impl IntoResponse, LeadsApiError> {
    let handler = state.summarize_handler();
    let query = SummarizeLeadsQuery {
        filter: params.into_filter(),
    };

    let summary = handler.handle(query).await?;

    Ok(Json(LeadMetricsResponse { summary }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts lead errors to HTTP responses.
pub struct LeadsApiError(LeadError);

impl From<LeadError> for LeadsApiError {
    fn from(err: LeadError) -> Self {
        Self(err)
    }
}

impl IntoResponse for LeadsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self.0 {
            LeadError::NotFound { .. } => (StatusCode::NOT_FOUND, "LEAD_NOT_FOUND"),
            LeadError::Dataset { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
