use std::sync::Arc;

use usage_dashboard_lib::services::{
    self, UpstreamService, UsageService, DEFAULT_UPSTREAM_BASE_URL,
};
use usage_dashboard_lib::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting usage dashboard API");

    let upstream_base = std::env::var("UPSTREAM_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string());
    tracing::info!("Upstream base URL: {}", upstream_base);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173".to_string())
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    // Initialize services
    let upstream = Arc::new(UpstreamService::new(upstream_base));
    let usage_service = Arc::new(UsageService::new(upstream));

    let state = Arc::new(AppState { usage_service });

    services::start_api_server(&bind_addr, &cors_origins, state).await?;

    Ok(())
}
