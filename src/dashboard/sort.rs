//! Multi-column sort state synchronized with the `sort` URL parameter
//!
//! The spec is an ordered list of `(column, direction)` pairs; list order is
//! sort precedence. Each column cycles `unsorted → asc → desc → unsorted` as
//! its header is clicked, and the whole spec round-trips through the query
//! parameter value `col:asc,col2:desc,...`.

use std::cmp::Ordering;
use std::fmt;

use crate::types::Usage;

/// Columns the table allows sorting on; ids double as URL tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ReportName,
    CreditsUsed,
}

impl SortColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::ReportName => "report_name",
            SortColumn::CreditsUsed => "credits_used",
        }
    }

    /// Recognize a column id from a URL token
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "report_name" => Some(SortColumn::ReportName),
            "credits_used" => Some(SortColumn::CreditsUsed),
            _ => None,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One active sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub descending: bool,
}

/// Ordered list of active sort directives, unique by column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Parse a `sort` parameter value, dropping invalid tokens silently:
    /// unknown columns, directions other than `asc`/`desc`, tokens without a
    /// `:`, and duplicate columns after the first.
    pub fn parse(param: &str) -> Self {
        let mut keys: Vec<SortKey> = Vec::new();
        for token in param.split(',') {
            let mut parts = token.split(':');
            let (Some(id), Some(direction)) = (parts.next(), parts.next()) else {
                continue;
            };
            let Some(column) = SortColumn::parse(id) else {
                continue;
            };
            let descending = match direction {
                "asc" => false,
                "desc" => true,
                _ => continue,
            };
            if keys.iter().any(|key| key.column == column) {
                continue;
            }
            keys.push(SortKey { column, descending });
        }

        Self { keys }
    }

    /// Initial state for a page load: absent parameter means unsorted
    pub fn from_param(param: Option<&str>) -> Self {
        param.map(Self::parse).unwrap_or_default()
    }

    /// Serialize for the URL; `None` means the parameter is removed entirely
    pub fn to_param(&self) -> Option<String> {
        if self.keys.is_empty() {
            return None;
        }
        let tokens: Vec<String> = self
            .keys
            .iter()
            .map(|key| format!("{}:{}", key.column, direction_str(key.descending)))
            .collect();
        Some(tokens.join(","))
    }

    /// Plain header click: the spec collapses to the clicked column alone,
    /// advanced one step in its cycle. A column that was not previously the
    /// sole active sort starts ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        let sole = match self.keys.as_slice() {
            [key] if key.column == column => Some(*key),
            _ => None,
        };

        self.keys = match sole {
            None => vec![SortKey {
                column,
                descending: false,
            }],
            Some(key) if !key.descending => vec![SortKey {
                column,
                descending: true,
            }],
            Some(_) => Vec::new(),
        };
    }

    /// Modified (secondary-sort) header click: an absent column is appended
    /// ascending; a present column advances in place, `asc → desc → removed`,
    /// without disturbing the precedence of the others.
    pub fn toggle_additive(&mut self, column: SortColumn) {
        match self.keys.iter().position(|key| key.column == column) {
            None => self.keys.push(SortKey {
                column,
                descending: false,
            }),
            Some(idx) if !self.keys[idx].descending => self.keys[idx].descending = true,
            Some(idx) => {
                self.keys.remove(idx);
            }
        }
    }

    /// Row comparison: entries in precedence order, first non-equal wins
    pub fn compare(&self, a: &Usage, b: &Usage) -> Ordering {
        for key in &self.keys {
            let ordering = compare_column(key.column, a, b);
            let ordering = if key.descending {
                ordering.reverse()
            } else {
                ordering
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Stable in-place sort; an empty spec preserves insertion order
    pub fn sort(&self, rows: &mut [Usage]) {
        if self.is_empty() {
            return;
        }
        rows.sort_by(|a, b| self.compare(a, b));
    }
}

fn compare_column(column: SortColumn, a: &Usage, b: &Usage) -> Ordering {
    match column {
        // An absent report name renders (and compares) as the empty string
        SortColumn::ReportName => a
            .report_name
            .as_deref()
            .unwrap_or("")
            .cmp(b.report_name.as_deref().unwrap_or("")),
        SortColumn::CreditsUsed => a.credits_used.total_cmp(&b.credits_used),
    }
}

fn direction_str(descending: bool) -> &'static str {
    if descending {
        "desc"
    } else {
        "asc"
    }
}
