//! User management tables: the users list and the games aggregate table.
//!
//! DESIGN
//! ======
//! Each user row runs its own deletion state machine:
//!
//! ```text
//! Idle -> Confirming -> InFlight -> Removing(Highlight) -> Removing(Fade) -> (detached)
//!             |             |
//!             v             v
//!           Idle         Restored
//! ```
//!
//! Only rows in `Idle` or `Restored` accept a new delete action.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::collections::BTreeMap;

use crate::net::types::{GameRecord, GameUpdate, UserRecord, play_time_seconds};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemovalStage {
    #[default]
    Highlight,
    Fade,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowPhase {
    #[default]
    Idle,
    Confirming,
    InFlight,
    Removing(RemovalStage),
    /// A failed deletion put the row back; it is actionable again.
    Restored,
}

impl RowPhase {
    #[must_use]
    pub fn accepts_delete(self) -> bool {
        matches!(self, Self::Idle | Self::Restored)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub delete_url: String,
    pub form_fields: BTreeMap<String, String>,
    pub phase: RowPhase,
}

impl From<UserRecord> for UserRow {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
            delete_url: record.delete_url,
            form_fields: record.form_fields,
            phase: RowPhase::Idle,
        }
    }
}

impl UserRow {
    /// Label used in prompts and notifications.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.email.is_empty() {
            &self.email
        } else {
            &self.id
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRow {
    pub id: String,
    pub title: String,
    pub play_time: String,
    pub unique_players: u64,
    pub highlighted: bool,
}

impl From<GameRecord> for GameRow {
    fn from(record: GameRecord) -> Self {
        let seconds = play_time_seconds(record.total_play_time_seconds, record.total_play_time);
        Self {
            id: record.id,
            title: record.title,
            play_time: format_play_time(seconds),
            unique_players: record.unique_players,
            highlighted: false,
        }
    }
}

/// Human-readable duration: `Xh Ym`, `Xm Ys`, or `Xs`.
#[must_use]
pub fn format_play_time(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = if seconds.is_finite() && seconds > 0.0 { seconds.floor() as u64 } else { 0 };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Whole player count from a JSON number; negative or non-finite is rejected.
fn player_count(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = value.round() as u64;
    Some(count)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub users: Vec<UserRow>,
    pub games: Vec<GameRow>,
}

impl UsersState {
    pub fn new(users: Vec<UserRecord>, games: Vec<GameRecord>) -> Self {
        Self {
            users: users.into_iter().map(UserRow::from).collect(),
            games: games.into_iter().map(GameRow::from).collect(),
        }
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&UserRow> {
        self.users.iter().find(|u| u.id == id)
    }

    fn set_phase(&mut self, id: &str, phase: RowPhase) {
        if let Some(row) = self.users.iter_mut().find(|u| u.id == id) {
            row.phase = phase;
        }
    }

    /// Enter `Confirming` if the row accepts a delete. Returns whether it did.
    pub fn begin_confirm(&mut self, id: &str) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(row) if row.phase.accepts_delete() => {
                row.phase = RowPhase::Confirming;
                true
            }
            _ => false,
        }
    }

    pub fn cancel_confirm(&mut self, id: &str) {
        self.set_phase(id, RowPhase::Idle);
    }

    pub fn mark_in_flight(&mut self, id: &str) {
        self.set_phase(id, RowPhase::InFlight);
    }

    pub fn mark_removing(&mut self, id: &str, stage: RemovalStage) {
        self.set_phase(id, RowPhase::Removing(stage));
    }

    pub fn restore(&mut self, id: &str) {
        self.set_phase(id, RowPhase::Restored);
    }

    pub fn detach(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
    }

    /// Apply aggregate updates by game id, highlighting each changed row.
    /// Returns the ids that matched a row.
    pub fn apply_game_updates(&mut self, updates: &[GameUpdate]) -> Vec<String> {
        let mut changed = Vec::new();
        for update in updates {
            let Some(row) = self.games.iter_mut().find(|g| g.id == update.id) else {
                log::debug!("no games row for updated id {}", update.id);
                continue;
            };
            row.play_time = format_play_time(update.play_time_seconds());
            if let Some(players) = update.unique_players.and_then(player_count) {
                row.unique_players = players;
            }
            row.highlighted = true;
            changed.push(row.id.clone());
        }
        changed
    }

    pub fn clear_highlights(&mut self, ids: &[String]) {
        for row in self.games.iter_mut().filter(|g| ids.contains(&g.id)) {
            row.highlighted = false;
        }
    }
}
