//! Upstream message and report type definitions

use serde::{Deserialize, Serialize};

/// A raw message from the upstream billing-period store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    /// ISO-8601 timestamp
    pub timestamp: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
}

/// Response envelope of the upstream messages endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

/// A generated report with a fixed credit cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub name: String,
    pub credit_cost: f64,
}
