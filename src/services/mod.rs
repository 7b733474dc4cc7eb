//! Service layer for the usage dashboard

pub mod api_server;
pub mod cost_service;
pub mod upstream_service;
pub mod usage_service;

pub use api_server::{build_router, start_api_server};
pub use upstream_service::{
    UpstreamApi, UpstreamError, UpstreamService, DEFAULT_UPSTREAM_BASE_URL,
};
pub use usage_service::{UsageError, UsageService};
