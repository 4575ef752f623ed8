use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::json;

use super::*;
use crate::config::ClientConfig;
use crate::error::COMMUNICATION_ERROR;
use crate::net::transport::{Method, RequestBody};
use crate::net::types::{GameRecord, UserRecord};
use crate::state::users::RowPhase;
use crate::test_support::{FakeTransport, InstantTimer, RecordingNotifier, ScriptedConfirm, run};

type Service = UserDeletionService<FakeTransport, RecordingNotifier, ScriptedConfirm, InstantTimer>;

struct Harness {
    svc: Service,
    transport: FakeTransport,
    notifier: RecordingNotifier,
    confirm: ScriptedConfirm,
    timer: InstantTimer,
    users: Rc<RefCell<UsersState>>,
}

fn harness(answer: bool) -> Harness {
    let transport = FakeTransport::default();
    let notifier = RecordingNotifier::default();
    let confirm = ScriptedConfirm::answering(answer);
    let timer = InstantTimer::default();
    let svc = UserDeletionService::new(
        transport.clone(),
        notifier.clone(),
        confirm.clone(),
        timer.clone(),
        ClientConfig::default().removal_timing(),
    );

    let mut form_fields = BTreeMap::new();
    form_fields.insert("_csrf".to_owned(), "tok en".to_owned());
    let alice = UserRecord {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: "player".to_owned(),
        delete_url: "/admin/users/u1/delete".to_owned(),
        form_fields,
    };
    let bob = UserRecord { id: "u2".to_owned(), name: "Bob".to_owned(), ..UserRecord::default() };
    let games = vec![
        GameRecord {
            id: "g1".to_owned(),
            title: "Chess".to_owned(),
            total_play_time_seconds: Some(600.0),
            total_play_time: None,
            unique_players: 2,
        },
        GameRecord { id: "g2".to_owned(), title: "Go".to_owned(), ..GameRecord::default() },
    ];
    let users = Rc::new(RefCell::new(UsersState::new(vec![alice, bob], games)));

    Harness { svc, transport, notifier, confirm, timer, users }
}

#[test]
fn declined_confirmation_sends_nothing() {
    let h = harness(false);

    let outcome = run(h.svc.delete(&h.users, "u1"));

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(h.transport.request_count(), 0);
    assert_eq!(h.users.borrow().user("u1").unwrap().phase, RowPhase::Idle);
    assert_eq!(
        h.confirm.prompts(),
        vec!["Are you sure you want to delete Alice? This cannot be undone.".to_owned()]
    );
}

#[test]
fn confirmed_delete_posts_form_with_header() {
    let h = harness(true);
    h.transport.push_json(200, json!({ "success": true }));

    run(h.svc.delete(&h.users, "u1"));

    let request = &h.transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "/admin/users/u1/delete");
    assert!(
        request
            .headers
            .contains(&("X-Requested-With".to_owned(), "XMLHttpRequest".to_owned()))
    );
    assert_eq!(request.body, RequestBody::Form("_csrf=tok%20en".to_owned()));
}

#[test]
fn success_stages_removal_and_detaches_row() {
    let h = harness(true);
    h.transport.push_json(200, json!({ "success": true, "message": "Alice removed" }));

    let outcome = run(h.svc.delete(&h.users, "u1"));

    assert_eq!(outcome, DeleteOutcome::Removed);
    let users = h.users.borrow();
    assert!(users.user("u1").is_none());
    assert_eq!(users.users.len(), 1);
    assert_eq!(h.notifier.seen(), vec![("Alice removed".to_owned(), Severity::Success)]);
    // highlight then fade; no game updates means no highlight wait
    assert_eq!(h.timer.slept(), vec![1000, 300]);
}

#[test]
fn success_without_message_uses_default_notice() {
    let h = harness(true);
    h.transport.push_json(200, json!({ "success": true }));

    run(h.svc.delete(&h.users, "u2"));

    assert_eq!(h.notifier.seen()[0].0, "User Bob deleted");
}

#[test]
fn updated_games_are_applied_then_unhighlighted() {
    let h = harness(true);
    h.transport.push_json(
        200,
        json!({
            "success": true,
            "updatedGames": [
                { "_id": "g1", "totalPlayTimeSeconds": 125, "uniquePlayers": 1 },
                { "_id": "g2", "totalPlayTime": 1.5, "uniquePlayers": 0 },
                { "_id": "missing", "totalPlayTimeSeconds": 1 }
            ]
        }),
    );

    run(h.svc.delete(&h.users, "u1"));

    let users = h.users.borrow();
    assert_eq!(users.games[0].play_time, "2m 5s");
    assert_eq!(users.games[0].unique_players, 1);
    assert_eq!(users.games[1].play_time, "1h 30m");
    assert!(users.games.iter().all(|g| !g.highlighted));
    assert_eq!(h.timer.slept(), vec![1000, 300, 700]);
}

#[test]
fn malformed_game_updates_do_not_fail_a_completed_deletion() {
    let h = harness(true);
    h.transport.push_json(
        200,
        json!({
            "success": true,
            "updatedGames": [
                { "_id": "g1", "totalPlayTimeSeconds": 125, "uniquePlayers": 4.0 },
                { "totalPlayTimeSeconds": 30 },
                { "_id": "g2", "uniquePlayers": "many" }
            ]
        }),
    );

    let outcome = run(h.svc.delete(&h.users, "u1"));

    assert_eq!(outcome, DeleteOutcome::Removed);
    let users = h.users.borrow();
    assert!(users.user("u1").is_none());
    assert_eq!(users.games[0].play_time, "2m 5s");
    assert_eq!(users.games[0].unique_players, 4);
    assert_eq!(users.games[1].unique_players, 0);
    assert_eq!(h.notifier.seen()[0].1, Severity::Success);
}

#[test]
fn server_refusal_restores_row_with_reason() {
    let h = harness(true);
    h.transport.push_json(403, json!({ "success": false, "message": "Cannot delete an admin" }));

    let outcome = run(h.svc.delete(&h.users, "u1"));

    assert_eq!(outcome, DeleteOutcome::Failed("Cannot delete an admin".to_owned()));
    assert_eq!(h.users.borrow().user("u1").unwrap().phase, RowPhase::Restored);
    assert_eq!(
        h.notifier.seen(),
        vec![("Failed to delete user: Cannot delete an admin".to_owned(), Severity::Error)]
    );
    assert!(h.timer.slept().is_empty());
}

#[test]
fn transport_fault_restores_row() {
    let h = harness(true);
    h.transport.push_fault("network down");

    let outcome = run(h.svc.delete(&h.users, "u1"));

    assert_eq!(outcome, DeleteOutcome::Failed(COMMUNICATION_ERROR.to_owned()));
    assert!(h.users.borrow().user("u1").unwrap().phase.accepts_delete());
}

#[test]
fn busy_or_unknown_rows_are_ignored() {
    let h = harness(true);
    h.users.borrow_mut().mark_in_flight("u1");

    assert_eq!(run(h.svc.delete(&h.users, "u1")), DeleteOutcome::Ignored);
    assert_eq!(run(h.svc.delete(&h.users, "nobody")), DeleteOutcome::Ignored);
    assert!(h.confirm.prompts().is_empty());
    assert_eq!(h.transport.request_count(), 0);
}
