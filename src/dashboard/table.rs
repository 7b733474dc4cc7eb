//! Table view state: sort precedence, pagination and cell formatting

use chrono::{DateTime, Utc};

use crate::dashboard::sort::{SortColumn, SortSpec};
use crate::types::Usage;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// In-memory state of the usage table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    sort: SortSpec,
    page_index: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort: SortSpec::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state from the URL's `sort` parameter at mount
    pub fn from_sort_param(param: Option<&str>) -> Self {
        Self {
            sort: SortSpec::from_param(param),
            ..Self::default()
        }
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    /// Current `sort` parameter value to write back to the URL
    pub fn sort_param(&self) -> Option<String> {
        self.sort.to_param()
    }

    /// A header click, with or without the secondary-sort modifier held.
    /// Changing the sort returns the table to its first page.
    pub fn click_header(&mut self, column: SortColumn, additive: bool) {
        if additive {
            self.sort.toggle_additive(column);
        } else {
            self.sort.toggle(column);
        }
        self.page_index = 0;
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&mut self, total_rows: usize) {
        if self.page_index + 1 < self.page_count(total_rows) {
            self.page_index += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// The current page of rows under the active sort. The page index is
    /// clamped to the last page when the data shrinks underneath it.
    pub fn visible_rows(&self, data: &[Usage]) -> Vec<Usage> {
        let mut rows = data.to_vec();
        self.sort.sort(&mut rows);

        let page = self.page_index.min(self.page_count(rows.len()) - 1);
        rows.into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect()
    }
}

/// One usage row formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub message_id: String,
    /// `dd-MM-yyyy HH:mm`, UTC
    pub timestamp: String,
    /// Absent report names render as the empty string
    pub report_name: String,
    /// Two decimal places
    pub credits_used: String,
}

pub fn render_row(usage: &Usage) -> RenderedRow {
    let timestamp = DateTime::parse_from_rfc3339(&usage.timestamp)
        .map(|t| t.with_timezone(&Utc).format("%d-%m-%Y %H:%M").to_string())
        .unwrap_or_else(|_| usage.timestamp.clone());

    RenderedRow {
        message_id: usage.message_id.to_string(),
        timestamp,
        report_name: usage.report_name.clone().unwrap_or_default(),
        credits_used: format!("{:.2}", usage.credits_used),
    }
}

/// Error-panel text for a failed table fetch
pub fn error_message(detail: &str) -> String {
    format!("Error loading usage data: {detail}")
}
