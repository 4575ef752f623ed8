//! Assistant status panel and log viewer operations.
//!
//! None of these propagate errors: failures land in [`AssistantState`] as
//! inline error blocks or go out through the [`Notifier`].

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use crate::config::Endpoints;
use crate::net::api::AssistantApi;
use crate::net::transport::Transport;
use crate::state::StateHandle;
use crate::state::assistant::{AssistantState, LogsView, StatusView};
use crate::util::confirm::Confirm;
use crate::util::notify::{Notifier, Severity};

pub const CLEAR_LOGS_PROMPT: &str = "Clear all assistant logs? This cannot be undone.";
pub const LOGS_CLEARED_MESSAGE: &str = "Assistant logs cleared";
pub const CONNECTION_OK_MESSAGE: &str = "Connection test succeeded";

pub struct StatusService<T, N, C> {
    api: AssistantApi<T>,
    notifier: N,
    confirm: C,
}

impl<T: Transport, N: Notifier, C: Confirm> StatusService<T, N, C> {
    pub fn new(transport: T, endpoints: Endpoints, notifier: N, confirm: C) -> Self {
        Self { api: AssistantApi::new(transport, endpoints), notifier, confirm }
    }

    pub async fn refresh_status(&self, state: &impl StateHandle<AssistantState>) {
        state.update(|s| s.status = StatusView::Loading);
        let view = match self.api.status().await {
            Ok(status) => StatusView::Ready(status),
            Err(e) => {
                log::warn!("assistant status failed: {e}");
                StatusView::Failed(e.user_message())
            }
        };
        state.update(|s| s.status = view);
    }

    pub async fn test_connection(&self, state: &impl StateHandle<AssistantState>) {
        if state.snapshot().testing {
            return;
        }
        state.update(|s| {
            s.testing = true;
            s.test_result = None;
        });

        let result = match self.api.test_connection().await {
            Ok(response) => {
                self.notifier.notify(CONNECTION_OK_MESSAGE, Severity::Success);
                Ok(response)
            }
            Err(e) => {
                log::warn!("connection test failed: {e}");
                let message = e.user_message();
                self.notifier
                    .notify(&format!("Connection test failed: {message}"), Severity::Error);
                Err(message)
            }
        };
        state.update(|s| {
            s.testing = false;
            s.test_result = Some(result);
        });
    }

    /// Reload the log list for `filter`, which becomes the active filter.
    pub async fn refresh_logs(&self, state: &impl StateHandle<AssistantState>, filter: Option<&str>) {
        let filter = filter.map(str::to_owned);
        state.update(|s| {
            s.filter.clone_from(&filter);
            s.logs = LogsView::Loading;
        });

        let view = match self.api.logs(filter.as_deref()).await {
            Ok(entries) => LogsView::from_entries(entries),
            Err(e) => {
                log::warn!("assistant logs failed: {e}");
                LogsView::Failed(e.user_message())
            }
        };
        state.update(|s| s.logs = view);
    }

    /// Clear the server-side log after confirmation, then reload the list.
    ///
    /// Returns `false` when the user declined; nothing was sent.
    pub async fn clear_logs(&self, state: &impl StateHandle<AssistantState>) -> bool {
        if state.snapshot().clearing || !self.confirm.confirm(CLEAR_LOGS_PROMPT) {
            return false;
        }

        state.update(|s| s.clearing = true);
        let result = self.api.clear_logs().await;
        state.update(|s| s.clearing = false);

        match result {
            Ok(()) => {
                self.notifier.notify(LOGS_CLEARED_MESSAGE, Severity::Success);
                let filter = state.snapshot().filter;
                self.refresh_logs(state, filter.as_deref()).await;
            }
            Err(e) => {
                log::warn!("clearing logs failed: {e}");
                self.notifier
                    .notify(&format!("Failed to clear logs: {}", e.user_message()), Severity::Error);
            }
        }
        true
    }
}

#[cfg(feature = "csr")]
impl
    StatusService<
        crate::net::transport::BrowserTransport,
        crate::util::notify::ToastNotifier,
        crate::util::confirm::BrowserConfirm,
    >
{
    pub fn browser(config: &crate::config::ClientConfig, notifier: crate::util::notify::ToastNotifier) -> Self {
        Self::new(
            crate::net::transport::BrowserTransport,
            config.endpoints.clone(),
            notifier,
            crate::util::confirm::BrowserConfirm,
        )
    }
}
