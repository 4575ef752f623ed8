use super::*;

fn user(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: format!("User {id}"),
        delete_url: format!("/admin/users/{id}/delete"),
        ..UserRecord::default()
    }
}

fn game(id: &str, seconds: f64, players: u64) -> GameRecord {
    GameRecord {
        id: id.to_owned(),
        title: format!("Game {id}"),
        total_play_time_seconds: Some(seconds),
        total_play_time: None,
        unique_players: players,
    }
}

// =============================================================
// format_play_time
// =============================================================

#[test]
fn format_play_time_minutes_and_seconds() {
    assert_eq!(format_play_time(125.0), "2m 5s");
}

#[test]
fn format_play_time_seconds_only() {
    assert_eq!(format_play_time(0.0), "0s");
    assert_eq!(format_play_time(59.9), "59s");
}

#[test]
fn format_play_time_hours_and_minutes() {
    assert_eq!(format_play_time(3600.0), "1h 0m");
    assert_eq!(format_play_time(5400.0), "1h 30m");
}

#[test]
fn format_play_time_rejects_nonsense() {
    assert_eq!(format_play_time(-5.0), "0s");
    assert_eq!(format_play_time(f64::NAN), "0s");
}

// =============================================================
// row state machine
// =============================================================

#[test]
fn begin_confirm_only_from_actionable_phases() {
    let mut state = UsersState::new(vec![user("u1")], Vec::new());
    assert!(state.begin_confirm("u1"));
    assert!(!state.begin_confirm("u1"));
    state.mark_in_flight("u1");
    assert!(!state.begin_confirm("u1"));
    state.restore("u1");
    assert!(state.begin_confirm("u1"));
}

#[test]
fn begin_confirm_unknown_row_is_false() {
    let mut state = UsersState::default();
    assert!(!state.begin_confirm("ghost"));
}

#[test]
fn cancel_returns_to_idle() {
    let mut state = UsersState::new(vec![user("u1")], Vec::new());
    state.begin_confirm("u1");
    state.cancel_confirm("u1");
    assert_eq!(state.user("u1").unwrap().phase, RowPhase::Idle);
}

#[test]
fn detach_removes_only_that_row() {
    let mut state = UsersState::new(vec![user("u1"), user("u2")], Vec::new());
    state.mark_removing("u1", RemovalStage::Fade);
    state.detach("u1");
    assert!(state.user("u1").is_none());
    assert_eq!(state.users.len(), 1);
}

#[test]
fn display_name_falls_back_to_email_then_id() {
    let mut row = UserRow::from(user("u1"));
    assert_eq!(row.display_name(), "User u1");
    row.name.clear();
    row.email = "ann@example.com".to_owned();
    assert_eq!(row.display_name(), "ann@example.com");
    row.email.clear();
    assert_eq!(row.display_name(), "u1");
}

// =============================================================
// game updates
// =============================================================

#[test]
fn game_row_from_legacy_hours_record() {
    let record = GameRecord {
        id: "g1".to_owned(),
        title: "Chess".to_owned(),
        total_play_time_seconds: None,
        total_play_time: Some(0.5),
        unique_players: 1,
    };
    assert_eq!(GameRow::from(record).play_time, "30m 0s");
}

#[test]
fn apply_game_updates_rewrites_matching_row() {
    let mut state = UsersState::new(Vec::new(), vec![game("g1", 9999.0, 9), game("g2", 10.0, 1)]);
    let updates = vec![GameUpdate {
        id: "g1".to_owned(),
        total_play_time_seconds: Some(125.0),
        total_play_time: None,
        unique_players: Some(4.0),
    }];

    let changed = state.apply_game_updates(&updates);

    assert_eq!(changed, vec!["g1".to_owned()]);
    let row = &state.games[0];
    assert_eq!(row.play_time, "2m 5s");
    assert_eq!(row.unique_players, 4);
    assert!(row.highlighted);
    assert!(!state.games[1].highlighted);
}

#[test]
fn apply_game_updates_uses_hours_fallback() {
    let mut state = UsersState::new(Vec::new(), vec![game("g1", 0.0, 0)]);
    let updates = vec![GameUpdate { id: "g1".to_owned(), total_play_time: Some(2.0), ..GameUpdate::default() }];
    state.apply_game_updates(&updates);
    assert_eq!(state.games[0].play_time, "2h 0m");
    assert_eq!(state.games[0].unique_players, 0);
}

#[test]
fn apply_game_updates_ignores_invalid_player_counts() {
    let mut state = UsersState::new(Vec::new(), vec![game("g1", 1.0, 7)]);
    for bad in [-1.0, f64::NAN] {
        state.apply_game_updates(&[GameUpdate { id: "g1".to_owned(), unique_players: Some(bad), ..GameUpdate::default() }]);
    }
    assert_eq!(state.games[0].unique_players, 7);
    state.apply_game_updates(&[GameUpdate { id: "g1".to_owned(), unique_players: Some(3.0), ..GameUpdate::default() }]);
    assert_eq!(state.games[0].unique_players, 3);
}

#[test]
fn apply_game_updates_skips_unknown_ids() {
    let mut state = UsersState::new(Vec::new(), vec![game("g1", 1.0, 1)]);
    let changed = state.apply_game_updates(&[GameUpdate { id: "nope".to_owned(), ..GameUpdate::default() }]);
    assert!(changed.is_empty());
    assert_eq!(state.games[0].play_time, "1s");
}

#[test]
fn clear_highlights_resets_flags() {
    let mut state = UsersState::new(Vec::new(), vec![game("g1", 1.0, 1)]);
    let changed = state.apply_game_updates(&[GameUpdate { id: "g1".to_owned(), ..GameUpdate::default() }]);
    state.clear_highlights(&changed);
    assert!(!state.games[0].highlighted);
}
