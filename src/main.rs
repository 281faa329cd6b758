// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::analysis_service::AnalysisService;
use crate::application::catalog_service::DatasetCatalog;
use crate::infrastructure::config::load_service_config;
use crate::infrastructure::github_repository::GithubDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dataset_charts, dataset_export, health_check, list_datasets, refresh_datasets,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_service_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(GithubDatasetRepository::new(config.github));

    // Create services (application layer)
    let analysis_service = AnalysisService::new(repository.clone());
    let catalog = DatasetCatalog::new(repository);

    // Create application state
    let state = Arc::new(AppState {
        analysis_service,
        catalog,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/datasets", get(list_datasets))
        .route("/datasets/refresh", post(refresh_datasets))
        .route("/datasets/:id/charts", get(dataset_charts))
        .route("/datasets/:id/export", get(dataset_export))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("starting motion-telemetry service on {addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
