//! Page bootstrap configuration.
//!
//! The server page embeds a JSON data island:
//!
//! ```html
//! <script id="admin-console-config" type="application/json">{ ... }</script>
//! ```
//!
//! Every field is optional. A missing or malformed island yields
//! [`ClientConfig::default`] and a warning in the console.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{GameRecord, UserRecord};

/// Element id of the embedded JSON data island.
pub const CONFIG_ELEMENT_ID: &str = "admin-console-config";

pub const DEFAULT_USER_ROLE: &str = "admin";
pub const DEFAULT_IMAGE_SIZE: u32 = 512;
pub const DEFAULT_ROW_REMOVAL_DELAY_MS: u32 = 1000;
pub const DEFAULT_FADE_MS: u32 = 300;
pub const DEFAULT_HIGHLIGHT_MS: u32 = 2000;

/// Endpoint paths consumed by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoints {
    pub chat: String,
    pub status: String,
    pub test_connection: String,
    pub logs: String,
    pub clear_logs: String,
    pub generate_image: String,
    pub ai_query: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            chat: "/assistant/chat".to_owned(),
            status: "/assistant/status".to_owned(),
            test_connection: "/assistant/test-connection".to_owned(),
            logs: "/assistant/logs".to_owned(),
            clear_logs: "/assistant/clear-logs".to_owned(),
            generate_image: "/assistant/generate-image".to_owned(),
            ai_query: "/admin/api/ai-query".to_owned(),
        }
    }
}

/// Staged-removal timings for deleted rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemovalTiming {
    /// How long a deleted row stays highlighted before fading.
    pub highlight_ms: u32,
    /// Fade duration before the row is detached.
    pub fade_ms: u32,
    /// How long an updated game row stays highlighted.
    pub game_highlight_ms: u32,
}

/// Client configuration embedded by the hosting page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Explicit identity of the signed-in admin, when the page knows it.
    pub user_id: Option<String>,
    pub user_role: String,
    pub endpoints: Endpoints,
    pub image_width: u32,
    pub image_height: u32,
    pub row_removal_delay_ms: u32,
    pub fade_ms: u32,
    pub highlight_ms: u32,
    pub users: Vec<UserRecord>,
    pub games: Vec<GameRecord>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            user_role: DEFAULT_USER_ROLE.to_owned(),
            endpoints: Endpoints::default(),
            image_width: DEFAULT_IMAGE_SIZE,
            image_height: DEFAULT_IMAGE_SIZE,
            row_removal_delay_ms: DEFAULT_ROW_REMOVAL_DELAY_MS,
            fade_ms: DEFAULT_FADE_MS,
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
            users: Vec::new(),
            games: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Parse the data island text, falling back to defaults on any error.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(mut config) => {
                config.user_id = config.user_id.filter(|id| !id.trim().is_empty());
                if config.user_role.trim().is_empty() {
                    config.user_role = DEFAULT_USER_ROLE.to_owned();
                }
                config
            }
            Err(e) => {
                log::warn!("ignoring malformed {CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }

    /// Read configuration from the current document.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) => Self::from_json(&raw),
                None => {
                    log::info!("no #{CONFIG_ELEMENT_ID} island, using defaults");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    #[must_use]
    pub fn removal_timing(&self) -> RemovalTiming {
        RemovalTiming {
            highlight_ms: self.row_removal_delay_ms,
            fade_ms: self.fade_ms,
            game_highlight_ms: self.highlight_ms,
        }
    }
}
