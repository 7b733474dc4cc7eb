//! Dashboard-side fetch client for the usage endpoint

use thiserror::Error;

use crate::dashboard::state::QueryState;
use crate::types::{Usage, UsageResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    RequestFailed(String),
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Fetches the flat usage list the chart and the table share
pub struct UsageClient {
    client: reqwest::Client,
    base_url: String,
}

impl UsageClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base}/usage`; any non-success status is a plain network failure
    pub async fn fetch_usage(&self) -> Result<Vec<Usage>, ClientError> {
        let response = self
            .client
            .get(format!("{}/usage", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::RequestFailed(
                "Network response was not ok".to_string(),
            ));
        }

        let body: UsageResponse = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))?;

        Ok(body.usage)
    }

    /// One fetch per mount; the resulting state drives both views
    pub async fn load(&self) -> QueryState<Vec<Usage>> {
        self.fetch_usage().await.into()
    }
}
