//! Usage Dashboard - Backend Library
//!
//! This library provides the usage API service (per-message credit
//! calculation served over HTTP) and the dashboard core logic (chart
//! aggregation, sort/URL synchronization, table state).

pub mod dashboard;
pub mod error;
pub mod services;
pub mod types;

use std::sync::Arc;

use services::UsageService;

/// Application state shared across API handlers
pub struct AppState {
    /// Usage service computing per-message credit consumption
    pub usage_service: Arc<UsageService>,
}

// Re-export commonly used types
pub use error::{AppError, AppResult};
pub use types::*;
