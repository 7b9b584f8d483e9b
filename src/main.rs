// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::{delete, get, post}, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::diagnosis_service::DiagnosisService;
use crate::application::history_cache::HistoryCache;
use crate::application::registry::EquipmentRegistry;
use crate::infrastructure::config::load_service_config;
use crate::infrastructure::static_history::StaticHistoryRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    clear_history, diagnose, equipment_defaults, health_check, invalidate_history, list_equipment,
    predict,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_service_config()?;

    // Registry is validated once; bad thresholds stop startup here
    let registry = Arc::new(EquipmentRegistry::builtin()?);
    let history_repository = Arc::new(StaticHistoryRepository::seeded());

    // Create services (application layer)
    let diagnosis_service = DiagnosisService::new(registry);
    let history_cache = HistoryCache::new(history_repository, config.history.ttl());

    // Create application state
    let state = Arc::new(AppState {
        diagnosis_service,
        history_cache,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/equipment", get(list_equipment))
        .route("/equipment/:equipment_type/defaults", get(equipment_defaults))
        .route("/predictions", post(predict))
        .route("/diagnoses", post(diagnose))
        .route("/history/cache", delete(clear_history))
        .route("/history/cache/:equipment_type/:failure_type", delete(invalidate_history))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting equipment-diagnostics service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
