//! Fetch lifecycle shared by the chart and the table
//!
//! One fetch per mount, three observable phases. A rejected fetch keeps only
//! the failure's message text; there is no retry and no cancellation.

use std::fmt;

/// Observable phases of the single usage fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// In flight; views render their loading placeholder
    Pending,
    /// Resolved with data
    Fulfilled(T),
    /// Failed with the underlying error's message
    Rejected(String),
}

impl<T> QueryState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Fulfilled(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for QueryState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => QueryState::Fulfilled(data),
            Err(err) => QueryState::Rejected(err.to_string()),
        }
    }
}
