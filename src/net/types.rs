//! Wire DTOs for the admin endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON so serde round-trips stay
//! lossless. Response types default every optional field; the server is the
//! system of record and may omit anything it has nothing to say about.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /assistant/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub user_role: String,
    /// `null` when no identity could be resolved; the server decides.
    pub user_id: Option<String>,
}

/// Successful chat reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: String,
}

/// Assistant connectivity and usage snapshot from `GET /assistant/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssistantStatus {
    pub connected: bool,
    pub provider: String,
    pub api_key_masked: String,
    pub model: String,
    pub total_requests: u64,
    /// Human-readable time of the most recent request, if any.
    pub last_request: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct StatusEnvelope {
    #[serde(default)]
    pub status: AssistantStatus,
}

/// Reply to `POST /assistant/test-connection`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ConnectionTestReply {
    #[serde(default)]
    pub response: String,
}

/// Outcome recorded for a single assistant log entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    #[default]
    Ok,
    Error,
}

/// One row of `GET /assistant/logs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: String,
    pub event: String,
    pub user_role: String,
    pub message: String,
    pub status: LogStatus,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct LogsEnvelope {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// Body of `POST /assistant/generate-image`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageReply {
    pub image_url: String,
}

/// A generated image and the prompt that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedImage {
    pub image_url: String,
    pub prompt: String,
}

/// Aggregate change to one game row, returned after a user deletion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub total_play_time_seconds: Option<f64>,
    /// Legacy hours-based total, used only when seconds are absent.
    #[serde(default)]
    pub total_play_time: Option<f64>,
    /// Sent as a JSON number that may carry a fractional part.
    #[serde(default)]
    pub unique_players: Option<f64>,
}

impl GameUpdate {
    /// Play time in seconds, falling back to the legacy hours field.
    #[must_use]
    pub fn play_time_seconds(&self) -> f64 {
        play_time_seconds(self.total_play_time_seconds, self.total_play_time)
    }
}

/// Seconds if the server sent them, else the legacy hours total times 3600.
#[must_use]
pub fn play_time_seconds(seconds: Option<f64>, legacy_hours: Option<f64>) -> f64 {
    seconds
        .or_else(|| legacy_hours.map(|hours| hours * 3600.0))
        .unwrap_or(0.0)
}

/// Reply to a user deletion form submission.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDeletionResult {
    pub success: bool,
    pub message: Option<String>,
    /// Malformed entries are dropped; the deletion itself already happened.
    #[serde(deserialize_with = "lenient_game_updates")]
    pub updated_games: Option<Vec<GameUpdate>>,
}

fn lenient_game_updates<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<GameUpdate>>, D::Error> {
    let entries = match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::Array(entries)) => entries,
        Some(other) => {
            log::warn!("ignoring non-array updatedGames: {other}");
            return Ok(None);
        }
    };
    let updates = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<GameUpdate>(entry) {
            Ok(update) if !update.id.is_empty() => Some(update),
            Ok(_) => {
                log::warn!("skipping game update without _id");
                None
            }
            Err(e) => {
                log::warn!("skipping malformed game update: {e}");
                None
            }
        })
        .collect();
    Ok(Some(updates))
}

/// A users-table row as embedded in the page bootstrap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Form action the server expects the deletion to be posted to.
    pub delete_url: String,
    /// Hidden inputs of the deletion form (CSRF token, method override).
    pub form_fields: BTreeMap<String, String>,
}

/// A games-table row as embedded in the page bootstrap.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub total_play_time_seconds: Option<f64>,
    pub total_play_time: Option<f64>,
    pub unique_players: u64,
}
