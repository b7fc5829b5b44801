// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::chart_renderer::ChartRenderer;
use crate::application::dashboard_service::DashboardService;
use crate::application::data_loader::DataLoader;
use crate::application::map_renderer::MapRenderer;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::dataset_sources::source_for;
use crate::infrastructure::map_canvas::MapCanvas;
use crate::infrastructure::plot_store::PlotStore;
use crate::infrastructure::status_board::StatusBoard;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{charts, health_check, index, map_view, select_marker, status};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Drawing surfaces (infrastructure layer)
    let canvas = Arc::new(MapCanvas::new());
    let plots = Arc::new(PlotStore::new());
    let status_board = Arc::new(StatusBoard::new());

    // Create services (application layer)
    let loader = DataLoader::new(source_for(&config.data.source));
    let map = MapRenderer::new(canvas.clone(), config.map.view(), config.map.tile_layer());
    let chart_renderer = Arc::new(ChartRenderer::new(plots.clone()));
    let dashboard = DashboardService::new(loader, map, chart_renderer, status_board.clone());

    // A failed load still serves the page, which shows the failure message
    let ready = dashboard.bootstrap().await.is_ok();

    // Create application state
    let state = Arc::new(AppState::new(canvas, plots, status_board, ready));

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/status", get(status))
        .route("/api/map", get(map_view))
        .route("/api/charts", get(charts))
        .route("/api/markers/:id/select", post(select_marker))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_address.parse()?;
    tracing::info!("Starting airq-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
