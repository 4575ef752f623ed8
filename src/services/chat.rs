//! Chat session operations: restore, submit, clear.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of the session-storage transcript. Each submit issues at
//! most one request; the session state is updated before and after it.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::ClientConfig;
use crate::net::api::AssistantApi;
use crate::net::transport::Transport;
use crate::net::types::ChatRequest;
use crate::state::StateHandle;
use crate::state::chat::{ChatMessage, ChatSession, HISTORY_KEY, SessionStore, decode_history, resolve_user_id};

pub struct ChatService<T, S> {
    api: AssistantApi<T>,
    store: S,
    embedded_user_id: Option<String>,
    user_role: String,
}

impl<T: Transport, S: SessionStore> ChatService<T, S> {
    pub fn new(transport: T, store: S, config: &ClientConfig) -> Self {
        Self {
            api: AssistantApi::new(transport, config.endpoints.clone()),
            store,
            embedded_user_id: config.user_id.clone(),
            user_role: config.user_role.clone(),
        }
    }

    /// Replay the stored transcript into `session`. Never fails.
    pub fn restore(&self, session: &impl StateHandle<ChatSession>) {
        let stored = decode_history(self.store.get(HISTORY_KEY).as_deref());
        session.update(|s| *s = ChatSession::restored(stored));
    }

    /// Send `input` to the assistant.
    ///
    /// Returns `false` without touching the network when the input is blank
    /// or a request is already pending.
    pub async fn submit(&self, session: &impl StateHandle<ChatSession>, input: &str) -> bool {
        let message = input.trim();
        if message.is_empty() || session.snapshot().pending {
            return false;
        }

        session.update(|s| s.begin(message));
        let request = ChatRequest {
            message: message.to_owned(),
            user_role: self.user_role.clone(),
            user_id: resolve_user_id(self.embedded_user_id.as_deref(), &self.store),
        };

        match self.api.chat(&request).await {
            Ok(reply) => {
                let mut history = Vec::new();
                session.update(|s| {
                    s.complete(message, &reply);
                    history.clone_from(&s.history);
                });
                self.persist(&history);
            }
            Err(e) => {
                log::warn!("chat request failed: {e}");
                session.update(|s| s.fail(&e.user_message()));
            }
        }
        true
    }

    /// Empty the transcript, forget the stored copy, show the restart notice.
    pub fn clear(&self, session: &impl StateHandle<ChatSession>) {
        self.store.remove(HISTORY_KEY);
        session.update(ChatSession::reset);
    }

    fn persist(&self, history: &[ChatMessage]) {
        match serde_json::to_string(history) {
            Ok(raw) => self.store.set(HISTORY_KEY, &raw),
            Err(e) => log::warn!("chat history not saved: {e}"),
        }
    }
}

#[cfg(feature = "csr")]
impl ChatService<crate::net::transport::BrowserTransport, crate::state::chat::BrowserSessionStore> {
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(
            crate::net::transport::BrowserTransport,
            crate::state::chat::BrowserSessionStore,
            config,
        )
    }
}
