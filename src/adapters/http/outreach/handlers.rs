//! HTTP handlers for the outreach compose endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::outreach::{ComposeOutreachCommand, ComposeOutreachHandler};
use crate::domain::lead::LeadError;
use crate::ports::LeadCatalog;

use super::super::ErrorResponse;
use super::dto::{ComposeOutreachRequest, ComposeOutreachResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the outreach boundary.
#[derive(Clone)]
pub struct OutreachAppState {
    pub catalog: Arc<dyn LeadCatalog>,
}

impl OutreachAppState {
    pub fn compose_handler(&self) -> ComposeOutreachHandler {
        ComposeOutreachHandler::new(self.catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/outreach - Compose a persona-driven outreach message
pub async fn compose_outreach(
    State(state): State<OutreachAppState>,
    Json(request): Json<ComposeOutreachRequest>,
) -> Result<impl IntoResponse, OutreachApiError> {
    let handler = state.compose_handler();
    let command = ComposeOutreachCommand {
        lead_id: request.lead_id.clone(),
        persona: request.persona_input(),
        offer: request.offer.clone(),
    };

    let result = handler.handle(command).await?;

    tracing::debug!(lead_id = %result.lead.id, tone = %result.persona.tone, "outreach composed");
    Ok(Json(ComposeOutreachResponse {
        lead: result.lead,
        persona: result.persona,
        message: result.message,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts lead errors to HTTP responses.
pub struct OutreachApiError(LeadError);

impl From<LeadError> for OutreachApiError {
    fn from(err: LeadError) -> Self {
        Self(err)
    }
}

impl IntoResponse for OutreachApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self.0 {
            LeadError::NotFound { .. } => (StatusCode::NOT_FOUND, "LEAD_NOT_FOUND"),
            LeadError::Dataset { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::InMemoryLeadCatalog;

    fn test_state() -> OutreachAppState {
        OutreachAppState {
            catalog: Arc::new(InMemoryLeadCatalog::seeded()),
        }
    }

    fn request(lead_id: &str) -> ComposeOutreachRequest {
        ComposeOutreachRequest {
            lead_id: lead_id.to_string(),
            persona: None,
            offer: "revenue workshop".to_string(),
        }
    }

    #[tokio::test]
    async fn compose_succeeds_for_known_lead() {
        let result = compose_outreach(State(test_state()), Json(request("lead-001"))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn compose_returns_404_for_unknown_lead() {
        let result = compose_outreach(State(test_state()), Json(request("lead-404"))).await;
        let response = match result {
            Err(err) => err.into_response(),
            Ok(_) => panic!("Expected not found error"),
        };
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_maps_not_found_to_404() {
        let err = OutreachApiError(LeadError::not_found("lead-404"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
