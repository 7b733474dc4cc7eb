//! Usage service assembling per-message credit consumption

use std::sync::Arc;

use thiserror::Error;

use crate::services::cost_service;
use crate::services::{UpstreamApi, UpstreamError};
use crate::types::{Message, Usage};

#[derive(Error, Debug)]
pub enum UsageError {
    #[error("{0}")]
    Upstream(#[from] UpstreamError),
}

pub struct UsageService {
    upstream: Arc<dyn UpstreamApi>,
}

impl UsageService {
    pub fn new(upstream: Arc<dyn UpstreamApi>) -> Self {
        Self { upstream }
    }

    /// Usage entries for the current billing period, in upstream message order
    pub async fn get_usage(&self) -> Result<Vec<Usage>, UsageError> {
        let messages = self.upstream.fetch_messages().await?;
        tracing::info!("Calculating credits for {} messages", messages.len());

        let mut usage = Vec::with_capacity(messages.len());
        for message in messages {
            let (report_name, credits_used) = self.message_credits(&message).await?;
            usage.push(Usage {
                message_id: message.id,
                timestamp: message.timestamp,
                report_name,
                credits_used,
            });
        }

        Ok(usage)
    }

    /// Credits consumed by one message: the report's cost when it references
    /// a known report, otherwise text-based credits
    async fn message_credits(
        &self,
        message: &Message,
    ) -> Result<(Option<String>, f64), UsageError> {
        if let Some(report_id) = message.report_id {
            if let Some(report) = self.upstream.fetch_report(report_id).await? {
                return Ok((Some(report.name), report.credit_cost));
            }
        }

        Ok((None, cost_service::text_based_credits(&message.text)))
    }
}
