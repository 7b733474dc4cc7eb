//! HTTP API server exposing the usage endpoint to the dashboard

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{AppError, AppResult};
use crate::types::UsageResponse;
use crate::AppState;

/// Build the API router with CORS and request tracing
pub fn build_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/usage", get(get_usage))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the API until shutdown
pub async fn start_api_server(
    bind_addr: &str,
    cors_origins: &[String],
    state: Arc<AppState>,
) -> AppResult<()> {
    let app = build_router(state, cors_origins);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Usage API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Usage data for the current billing period with credits per message
async fn get_usage(State(state): State<Arc<AppState>>) -> Result<Json<UsageResponse>, AppError> {
    let usage = state.usage_service.get_usage().await?;
    Ok(Json(UsageResponse { usage }))
}
