//! Usage record type definitions
//!
//! Field names are serialized as-is (snake_case); they double as the column
//! ids of the dashboard table and the `sort` URL grammar.

use serde::{Deserialize, Serialize};

/// One usage entry: the credits a single message consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub message_id: i64,
    /// ISO-8601 timestamp of the underlying message
    pub timestamp: String,
    #[serde(default)]
    pub report_name: Option<String>,
    pub credits_used: f64,
}

/// Response envelope of `GET /usage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageResponse {
    pub usage: Vec<Usage>,
}

/// Credits consumed on one UTC calendar day, as charted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUsage {
    /// UTC midnight of the day, e.g. `2024-03-15T00:00:00.000Z`
    pub date: String,
    /// Day total, rounded to 2 decimal places
    pub credits: f64,
}
