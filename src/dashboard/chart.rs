//! Daily-bucket aggregation for the usage bar chart

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::types::{DailyUsage, Usage};

/// Group records by UTC calendar day and sum their credits.
///
/// Absent input yields an empty sequence. Output is ascending by date string
/// with one bucket per distinct day, each total rounded to 2 decimal places.
pub fn daily_usage(records: Option<&[Usage]>) -> Vec<DailyUsage> {
    let Some(records) = records else {
        return Vec::new();
    };

    // The date-string key makes BTreeMap ordering the chart ordering
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        let Ok(timestamp) = DateTime::parse_from_rfc3339(&record.timestamp) else {
            continue;
        };
        let day = timestamp.with_timezone(&Utc).date_naive();
        *buckets.entry(format!("{day}T00:00:00.000Z")).or_insert(0.0) += record.credits_used;
    }

    buckets
        .into_iter()
        .map(|(date, credits)| DailyUsage {
            date,
            credits: round2(credits),
        })
        .collect()
}

/// Error-panel text for a failed chart fetch
pub fn error_message(detail: &str) -> String {
    format!("Error loading chart data: {detail}")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
