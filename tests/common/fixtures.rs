//! Test fixtures and data factories

use usage_dashboard_lib::types::{Message, Report, Usage};

/// Create a plain message without a report reference
pub fn message(id: i64, timestamp: &str, text: &str) -> Message {
    Message {
        id,
        timestamp: timestamp.to_string(),
        text: text.to_string(),
        report_id: None,
    }
}

/// Create a message referencing a report
pub fn report_message(id: i64, timestamp: &str, text: &str, report_id: i64) -> Message {
    Message {
        report_id: Some(report_id),
        ..message(id, timestamp, text)
    }
}

/// Create a report with a fixed credit cost
pub fn report(id: i64, name: &str, credit_cost: f64) -> Report {
    Report {
        id,
        name: name.to_string(),
        credit_cost,
    }
}

/// Create a usage row for dashboard-side tests
pub fn usage(message_id: i64, timestamp: &str, report_name: Option<&str>, credits_used: f64) -> Usage {
    Usage {
        message_id,
        timestamp: timestamp.to_string(),
        report_name: report_name.map(str::to_string),
        credits_used,
    }
}

/// The five-row dataset the table scenarios sort and page through
pub fn sample_usage_rows() -> Vec<Usage> {
    vec![
        usage(1, "2024-03-20T10:00:00Z", Some("Daily Report"), 10.0),
        usage(2, "2024-03-20T11:00:00Z", Some("Daily Report"), 5.0),
        usage(3, "2024-03-20T12:00:00Z", Some("Weekly Report"), 15.0),
        usage(4, "2024-03-20T13:00:00Z", Some("Weekly Report"), 10.0),
        usage(5, "2024-03-20T14:00:00Z", Some("Daily Report"), 15.0),
    ]
}
