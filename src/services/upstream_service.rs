//! Upstream API service for fetching billing-period messages and report costs

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use thiserror::Error;

use crate::types::{Message, MessagesResponse, Report};

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://owpublic.blob.core.windows.net/tech-task";

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Error fetching message data")]
    MessageFetch,
    #[error("Error fetching report data")]
    ReportFetch,
    #[error("API request failed: {0}")]
    RequestFailed(String),
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Data-source seam for the usage service; implemented over HTTP in
/// production and by hand-written mocks in tests.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Fetch all messages of the current billing period
    async fn fetch_messages(&self) -> Result<Vec<Message>, UpstreamError>;

    /// Look up a report by id; `None` when the upstream has no such report
    async fn fetch_report(&self, report_id: i64) -> Result<Option<Report>, UpstreamError>;
}

/// HTTP implementation of [`UpstreamApi`]
pub struct UpstreamService {
    client: reqwest::Client,
    base_url: String,
    /// Report lookups never change within a process; misses are cached too
    report_cache: RwLock<HashMap<i64, Option<Report>>>,
}

impl UpstreamService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            report_cache: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UpstreamApi for UpstreamService {
    async fn fetch_messages(&self) -> Result<Vec<Message>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/messages/current-period", self.base_url))
            .send()
            .await
            .map_err(|e| UpstreamError::RequestFailed(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(UpstreamError::MessageFetch);
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::ParseError(e.to_string()))?;

        Ok(body.messages)
    }

    async fn fetch_report(&self, report_id: i64) -> Result<Option<Report>, UpstreamError> {
        if let Some(cached) = self.report_cache.read().get(&report_id) {
            return Ok(cached.clone());
        }

        let response = self
            .client
            .get(format!("{}/reports/{}", self.base_url, report_id))
            .send()
            .await
            .map_err(|e| UpstreamError::RequestFailed(e.to_string()))?;

        let report = match response.status() {
            reqwest::StatusCode::NOT_FOUND => None,
            reqwest::StatusCode::OK => Some(
                response
                    .json::<Report>()
                    .await
                    .map_err(|e| UpstreamError::ParseError(e.to_string()))?,
            ),
            _ => return Err(UpstreamError::ReportFetch),
        };

        self.report_cache.write().insert(report_id, report.clone());
        Ok(report)
    }
}
