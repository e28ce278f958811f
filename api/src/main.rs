//! OpenDesk API - Main Entry Point

use desk_assign::{DispatchService, FileWorkloadStore};
use opendesk_api::config::ApiConfig;
use opendesk_api::{build_router, ApiState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("OpenDesk API v{}", env!("CARGO_PKG_VERSION"));

    // Load config
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "/etc/opendesk/api.json".into());

    let config = ApiConfig::load(&config_path).unwrap_or_else(|_| {
        tracing::warn!("Config not found, using defaults");
        ApiConfig::default()
    });

    let service = DispatchService::new(FileWorkloadStore::new(config.snapshot_path.clone()));
    let app = build_router(Arc::new(ApiState { service }));

    tracing::info!("API listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
