//! Client-side dashboard logic: fetch lifecycle, chart aggregation and
//! table sort/pagination state, free of any rendering concerns

pub mod chart;
pub mod client;
pub mod sort;
pub mod state;
pub mod table;

pub use client::{ClientError, UsageClient};
pub use sort::{SortColumn, SortKey, SortSpec};
pub use state::QueryState;
pub use table::{RenderedRow, TableState, DEFAULT_PAGE_SIZE};
