//! Assistant status panel and log viewer state.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::net::types::{AssistantStatus, LogEntry, LogStatus};

/// Log categories offered by the filter selector, as `(value, label)`.
pub const LOG_FILTERS: &[(&str, &str)] = &[
    ("all", "All events"),
    ("chat", "Chat"),
    ("image", "Image generation"),
    ("status", "Status checks"),
    ("error", "Errors only"),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusView {
    #[default]
    Loading,
    Ready(AssistantStatus),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LogsView {
    #[default]
    Loading,
    /// The server returned no entries for the active filter.
    Empty,
    Entries(Vec<LogEntry>),
    Failed(String),
}

impl LogsView {
    /// Replace whatever was shown with a fresh result set.
    #[must_use]
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        if entries.is_empty() { Self::Empty } else { Self::Entries(entries) }
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        match self {
            Self::Entries(entries) => entries.iter().filter(|e| e.status == LogStatus::Error).count(),
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssistantState {
    pub status: StatusView,
    /// Connection test in flight; its trigger is disabled.
    pub testing: bool,
    pub test_result: Option<Result<String, String>>,
    pub logs: LogsView,
    /// Active log category; `None` means all.
    pub filter: Option<String>,
    /// Clear-logs call in flight; its trigger is disabled.
    pub clearing: bool,
}

/// Display label for the masked API key, which the server may omit.
#[must_use]
pub fn api_key_label(status: &AssistantStatus) -> &str {
    if status.api_key_masked.is_empty() { "Not configured" } else { &status.api_key_masked }
}
