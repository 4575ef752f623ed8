//! Assistant chat session state and its session-storage persistence.
//!
//! DESIGN
//! ======
//! `history` is the persisted transcript: only completed user/assistant
//! exchanges land there. `feed` is what the panel shows, which additionally
//! holds welcome/restart notices and error messages. Keeping the two apart
//! means a failed request can never corrupt what gets restored next time.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::util::timer::now_label;

/// Session-storage key holding the serialized transcript.
pub const HISTORY_KEY: &str = "assistant_chat_history";

/// Session-storage key holding the signed-in user record, if the login flow
/// stored one.
pub const SESSION_USER_KEY: &str = "admin_user";

pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your AI assistant. Ask me about users, games, or platform activity.";
pub const RESTORE_FAILED_MESSAGE: &str =
    "Welcome back! Your previous conversation could not be restored, so we're starting fresh.";
pub const RESTART_MESSAGE: &str = "Chat cleared. How can I help you?";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

impl ChatRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub message: String,
    /// `HH:MM` label taken when the message entered the feed. Not persisted.
    #[serde(skip)]
    pub stamp: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, message: impl Into<String>) -> Self {
        Self { role, message: message.into(), stamp: now_label() }
    }
}

// Equality is by content; the display stamp is not part of it.
impl PartialEq for ChatMessage {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && self.message == other.message
    }
}

impl Eq for ChatMessage {}

/// Result of reading the persisted transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredHistory {
    Missing,
    Corrupt,
    Loaded(Vec<ChatMessage>),
}

/// Decode the raw session-storage value. Never fails: bad data is `Corrupt`.
#[must_use]
pub fn decode_history(raw: Option<&str>) -> StoredHistory {
    let Some(raw) = raw else {
        return StoredHistory::Missing;
    };
    match serde_json::from_str::<Vec<ChatMessage>>(raw) {
        Ok(messages) if messages.is_empty() => StoredHistory::Missing,
        Ok(messages) => StoredHistory::Loaded(messages),
        Err(e) => {
            log::warn!("discarding corrupt chat history: {e}");
            StoredHistory::Corrupt
        }
    }
}

/// One browser-tab chat session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatSession {
    pub history: Vec<ChatMessage>,
    pub feed: Vec<ChatMessage>,
    /// A request is in flight; the panel shows a placeholder.
    pub pending: bool,
}

impl ChatSession {
    /// Rebuild a session from what storage held.
    #[must_use]
    pub fn restored(stored: StoredHistory) -> Self {
        match stored {
            StoredHistory::Loaded(history) => {
                let stamp = now_label();
                let feed = history
                    .iter()
                    .map(|m| ChatMessage { stamp: stamp.clone(), ..m.clone() })
                    .collect();
                Self { feed, history, pending: false }
            }
            StoredHistory::Missing => Self::with_notice(WELCOME_MESSAGE),
            StoredHistory::Corrupt => Self::with_notice(RESTORE_FAILED_MESSAGE),
        }
    }

    fn with_notice(notice: &str) -> Self {
        Self {
            history: Vec::new(),
            feed: vec![ChatMessage::new(ChatRole::Assistant, notice)],
            pending: false,
        }
    }

    /// Show the outgoing message and mark the request pending.
    pub fn begin(&mut self, message: &str) {
        self.feed.push(ChatMessage::new(ChatRole::User, message));
        self.pending = true;
    }

    /// Record a successful exchange in both the feed and the transcript.
    pub fn complete(&mut self, message: &str, reply: &str) {
        self.pending = false;
        self.feed.push(ChatMessage::new(ChatRole::Assistant, reply));
        self.history.push(ChatMessage::new(ChatRole::User, message));
        self.history.push(ChatMessage::new(ChatRole::Assistant, reply));
    }

    /// Show a failure; the transcript is left untouched.
    pub fn fail(&mut self, error: &str) {
        self.pending = false;
        self.feed.push(ChatMessage::new(ChatRole::Error, error));
    }

    /// Drop everything and show the restart notice.
    pub fn reset(&mut self) {
        *self = Self::with_notice(RESTART_MESSAGE);
    }
}

/// Session-scoped key/value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.sessionStorage`. Reads nothing and writes nowhere outside a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("session storage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Pick the identity sent with chat requests.
///
/// The page-embedded id wins; otherwise the `id`/`_id` of the stored session
/// user record; otherwise `None`. The server validates whatever is sent.
pub fn resolve_user_id(embedded: Option<&str>, store: &impl SessionStore) -> Option<String> {
    if let Some(id) = embedded.map(str::trim).filter(|id| !id.is_empty()) {
        return Some(id.to_owned());
    }
    let raw = store.get(SESSION_USER_KEY)?;
    let record: serde_json::Value = serde_json::from_str(&raw).ok()?;
    ["id", "_id", "userId"]
        .iter()
        .find_map(|key| record.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}
