//! Integration tests for the outreach compose HTTP boundary.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use lead_scout::adapters::catalog::InMemoryLeadCatalog;
use lead_scout::adapters::http::{api_router, LeadsAppState, OutreachAppState};
use lead_scout::ports::LeadCatalog;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let catalog: Arc<dyn LeadCatalog> = Arc::new(InMemoryLeadCatalog::seeded());
    api_router(
        LeadsAppState {
            catalog: catalog.clone(),
        },
        OutreachAppState { catalog },
    )
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// =============================================================================
// Compose Endpoint
// =============================================================================

#[tokio::test]
async fn composes_with_derived_persona_when_none_supplied() {
    // lead-002 is a C-Level lead with Hiring + Content Engagement signals.
    let (status, body) = post_json(
        app(),
        "/api/outreach",
        json!({"leadId": "lead-002", "offer": "revenue workshop"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lead"]["id"], "lead-002");
    assert_eq!(body["persona"]["id"], "persona-lead-002");
    assert_eq!(body["persona"]["tone"], "Visionary");
    assert_eq!(body["persona"]["callToAction"], "30 minute working session");

    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Northwind Labs"));
    assert!(message.contains("Hiring, Content Engagement"));
}

#[tokio::test]
async fn non_c_level_lead_derives_consultative_tone() {
    let (status, body) = post_json(
        app(),
        "/api/outreach",
        json!({"leadId": "lead-005", "offer": "freight pilot"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["persona"]["tone"], "Consultative");
    // Persona name is the last two tokens of "Sales Manager".
    assert_eq!(body["persona"]["name"], "Sales Manager");
}

#[tokio::test]
async fn supplied_persona_is_echoed_with_synthesized_id() {
    let (status, body) = post_json(
        app(),
        "/api/outreach",
        json!({
            "leadId": "lead-001",
            "persona": {
                "name": "Revenue Leader",
                "painPoints": ["Forecast slippage"],
                "valueDrivers": ["Deal inspection"],
                "tone": "Challenger",
                "callToAction": "15 minute teardown"
            },
            "offer": "pilot"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["persona"]["id"], "persona-lead-001");
    assert_eq!(body["persona"]["name"], "Revenue Leader");
    assert_eq!(body["persona"]["tone"], "Challenger");
    assert_eq!(body["persona"]["callToAction"], "15 minute teardown");
}

#[tokio::test]
async fn unknown_lead_returns_404_with_error_payload() {
    let (status, body) = post_json(
        app(),
        "/api/outreach",
        json!({"leadId": "lead-404", "offer": "pilot"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "LEAD_NOT_FOUND");
    assert!(body["error"].as_str().unwrap().contains("lead-404"));
}

#[tokio::test]
async fn composition_is_deterministic_across_requests() {
    let request = json!({"leadId": "lead-007", "offer": "demo offer"});
    let (_, first) = post_json(app(), "/api/outreach", request.clone()).await;
    let (_, second) = post_json(app(), "/api/outreach", request).await;
    assert_eq!(first["message"], second["message"]);
    assert_eq!(first["persona"], second["persona"]);
}
