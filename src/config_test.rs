use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = ClientConfig::from_json("{}");
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.endpoints.chat, "/assistant/chat");
    assert_eq!(config.endpoints.ai_query, "/admin/api/ai-query");
    assert_eq!(config.image_width, 512);
    assert_eq!(config.user_role, "admin");
}

#[test]
fn malformed_island_yields_defaults() {
    assert_eq!(ClientConfig::from_json("{ not json"), ClientConfig::default());
    assert_eq!(ClientConfig::from_json(""), ClientConfig::default());
}

#[test]
fn partial_endpoint_override_keeps_other_defaults() {
    let config = ClientConfig::from_json(r#"{ "endpoints": { "chat": "/v2/assistant/chat" } }"#);
    assert_eq!(config.endpoints.chat, "/v2/assistant/chat");
    assert_eq!(config.endpoints.status, "/assistant/status");
}

#[test]
fn blank_identity_fields_are_normalized() {
    let config = ClientConfig::from_json(r#"{ "userId": "  ", "userRole": "" }"#);
    assert_eq!(config.user_id, None);
    assert_eq!(config.user_role, "admin");
}

#[test]
fn bootstrap_rows_are_parsed() {
    let config = ClientConfig::from_json(
        r#"{
            "userId": "admin-1",
            "users": [{ "id": "u1", "name": "Ann", "deleteUrl": "/admin/users/u1/delete" }],
            "games": [{ "_id": "g1", "title": "Chess", "totalPlayTimeSeconds": 3600, "uniquePlayers": 3 }]
        }"#,
    );
    assert_eq!(config.user_id.as_deref(), Some("admin-1"));
    assert_eq!(config.users.len(), 1);
    assert_eq!(config.games[0].title, "Chess");
}

#[test]
fn removal_timing_maps_config_fields() {
    let config = ClientConfig { row_removal_delay_ms: 10, fade_ms: 20, highlight_ms: 30, ..ClientConfig::default() };
    assert_eq!(
        config.removal_timing(),
        RemovalTiming { highlight_ms: 10, fade_ms: 20, game_highlight_ms: 30 }
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_uses_defaults() {
    assert_eq!(ClientConfig::load(), ClientConfig::default());
}
