//! Lead Scout server binary.
//!
//! Loads configuration, builds the in-memory lead catalog, and serves the
//! lead query and outreach compose boundaries over HTTP.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use lead_scout::adapters::catalog::InMemoryLeadCatalog;
use lead_scout::adapters::http::{api_router, LeadsAppState, OutreachAppState};
use lead_scout::config::AppConfig;
use lead_scout::ports::LeadCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let catalog = match &config.catalog.dataset_path {
        Some(path) => {
            tracing::info!(path, "loading lead dataset from file");
            InMemoryLeadCatalog::from_file(path)?
        }
        None => {
            tracing::info!("using embedded seed dataset");
            InMemoryLeadCatalog::seeded()
        }
    };
    tracing::info!(leads = catalog.len(), "lead catalog ready");

    let catalog: Arc<dyn LeadCatalog> = Arc::new(catalog);

    let cors = build_cors(&config);
    let app = api_router(
        LeadsAppState {
            catalog: catalog.clone(),
        },
        OutreachAppState { catalog },
    )
    .layer(TraceLayer::new_for_http())
    .layer(cors)
    .layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "lead-scout listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
