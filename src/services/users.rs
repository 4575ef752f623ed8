//! User deletion flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives one row of the users table through its deletion state machine
//! (see `state::users`). A confirmed deletion is one form post; on success the
//! row is staged out (highlight, fade, detach) and the games table absorbs
//! whatever aggregate changes the server reported.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::config::RemovalTiming;
use crate::net::api::UsersApi;
use crate::net::transport::Transport;
use crate::state::StateHandle;
use crate::state::users::{RemovalStage, UsersState};
use crate::util::confirm::Confirm;
use crate::util::notify::{Notifier, Severity};
use crate::util::timer::Timer;

/// How a delete action ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Unknown row, or the row was busy.
    Ignored,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    Removed,
    /// The server refused or the request failed; the row is back.
    Failed(String),
}

pub struct UserDeletionService<T, N, C, M> {
    api: UsersApi<T>,
    notifier: N,
    confirm: C,
    timer: M,
    timing: RemovalTiming,
}

impl<T: Transport, N: Notifier, C: Confirm, M: Timer> UserDeletionService<T, N, C, M> {
    pub fn new(transport: T, notifier: N, confirm: C, timer: M, timing: RemovalTiming) -> Self {
        Self { api: UsersApi::new(transport), notifier, confirm, timer, timing }
    }

    pub async fn delete(&self, users: &impl StateHandle<UsersState>, id: &str) -> DeleteOutcome {
        let mut accepted = false;
        users.update(|s| accepted = s.begin_confirm(id));
        if !accepted {
            return DeleteOutcome::Ignored;
        }
        let Some(row) = users.snapshot().user(id).cloned() else {
            return DeleteOutcome::Ignored;
        };

        let prompt = format!("Are you sure you want to delete {}? This cannot be undone.", row.display_name());
        if !self.confirm.confirm(&prompt) {
            users.update(|s| s.cancel_confirm(id));
            return DeleteOutcome::Declined;
        }

        users.update(|s| s.mark_in_flight(id));
        let fields = row.form_fields.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let result = self.api.delete_user(&row.delete_url, fields).await;

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("deleting user {id} failed: {e}");
                let reason = e.user_message();
                users.update(|s| s.restore(id));
                self.notifier
                    .notify(&format!("Failed to delete user: {reason}"), Severity::Error);
                return DeleteOutcome::Failed(reason);
            }
        };

        let message = reply
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("User {} deleted", row.display_name()));
        self.notifier.notify(&message, Severity::Success);

        let mut changed = Vec::new();
        users.update(|s| {
            s.mark_removing(id, RemovalStage::Highlight);
            if let Some(updates) = &reply.updated_games {
                changed = s.apply_game_updates(updates);
            }
        });

        self.timer.sleep(self.timing.highlight_ms).await;
        users.update(|s| s.mark_removing(id, RemovalStage::Fade));
        self.timer.sleep(self.timing.fade_ms).await;
        users.update(|s| s.detach(id));

        if !changed.is_empty() {
            let elapsed = self.timing.highlight_ms.saturating_add(self.timing.fade_ms);
            self.timer
                .sleep(self.timing.game_highlight_ms.saturating_sub(elapsed))
                .await;
            users.update(|s| s.clear_highlights(&changed));
        }
        DeleteOutcome::Removed
    }
}

#[cfg(feature = "csr")]
impl
    UserDeletionService<
        crate::net::transport::BrowserTransport,
        crate::util::notify::ToastNotifier,
        crate::util::confirm::BrowserConfirm,
        crate::util::timer::BrowserTimer,
    >
{
    pub fn browser(config: &crate::config::ClientConfig, notifier: crate::util::notify::ToastNotifier) -> Self {
        Self::new(
            crate::net::transport::BrowserTransport,
            notifier,
            crate::util::confirm::BrowserConfirm,
            crate::util::timer::BrowserTimer,
            config.removal_timing(),
        )
    }
}
