//! Mock implementations for testing
//!
//! Provides an in-memory [`UpstreamApi`] for unit-level service tests and a
//! real local HTTP server speaking the upstream wire format for end-to-end
//! tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use usage_dashboard_lib::services::{UpstreamApi, UpstreamError};
use usage_dashboard_lib::types::{Message, Report};
use usage_dashboard_lib::AppState;

/// In-memory upstream with canned messages and reports
#[derive(Default)]
pub struct MockUpstream {
    messages: Vec<Message>,
    reports: HashMap<i64, Report>,
    fail_messages: bool,
    report_fetches: AtomicUsize,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_report(mut self, report: Report) -> Self {
        self.reports.insert(report.id, report);
        self
    }

    pub fn failing_messages(mut self) -> Self {
        self.fail_messages = true;
        self
    }

    pub fn report_fetches(&self) -> usize {
        self.report_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamApi for MockUpstream {
    async fn fetch_messages(&self) -> Result<Vec<Message>, UpstreamError> {
        if self.fail_messages {
            return Err(UpstreamError::MessageFetch);
        }
        Ok(self.messages.clone())
    }

    async fn fetch_report(&self, report_id: i64) -> Result<Option<Report>, UpstreamError> {
        self.report_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.reports.get(&report_id).cloned())
    }
}

/// Canned responses of a local upstream HTTP server.
///
/// `messages`: `None` means the messages endpoint answers 500.
/// `reports`: a `Some` value answers 200, a `None` value answers 500, an
/// absent id answers 404.
#[derive(Default, Clone)]
pub struct UpstreamResponses {
    pub messages: Option<serde_json::Value>,
    pub reports: HashMap<i64, Option<serde_json::Value>>,
}

type UpstreamServerState = Arc<(UpstreamResponses, Arc<AtomicUsize>)>;

/// Handle to a running mock upstream server
pub struct MockUpstreamServer {
    pub base_url: String,
    report_hits: Arc<AtomicUsize>,
}

impl MockUpstreamServer {
    pub fn report_hits(&self) -> usize {
        self.report_hits.load(Ordering::SeqCst)
    }
}

/// Spawn a local HTTP server speaking the upstream wire format
pub async fn spawn_upstream_server(responses: UpstreamResponses) -> MockUpstreamServer {
    let report_hits = Arc::new(AtomicUsize::new(0));
    let state: UpstreamServerState = Arc::new((responses, report_hits.clone()));

    let app = Router::new()
        .route("/messages/current-period", get(messages_handler))
        .route("/reports/:id", get(report_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock upstream");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock upstream died");
    });

    MockUpstreamServer {
        base_url: format!("http://{addr}"),
        report_hits,
    }
}

async fn messages_handler(State(state): State<UpstreamServerState>) -> Response {
    match &state.0.messages {
        Some(body) => Json(body.clone()).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn report_handler(
    Path(id): Path<i64>,
    State(state): State<UpstreamServerState>,
) -> Response {
    state.1.fetch_add(1, Ordering::SeqCst);
    match state.0.reports.get(&id) {
        Some(Some(body)) => Json(body.clone()).into_response(),
        Some(None) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Spawn the usage API itself on an ephemeral port, returning its base URL
pub async fn spawn_api_server(state: Arc<AppState>) -> String {
    let app = usage_dashboard_lib::services::build_router(
        state,
        &["http://localhost:5173".to_string()],
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind API server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("API server died");
    });

    format!("http://{addr}")
}
