use serde_json::json;

use super::*;
use crate::net::transport::RequestBody;
use crate::test_support::{FakeTransport, run};

fn query_type_sent(transport: &FakeTransport, index: usize) -> serde_json::Value {
    match &transport.requests()[index].body {
        RequestBody::Json(value) => value["queryType"].clone(),
        other => panic!("expected json body, got {other:?}"),
    }
}

#[test]
fn every_quick_query_sends_its_own_type() {
    let transport = FakeTransport::default();
    let client = QueryClient::new(transport.clone(), "/admin/api/ai-query");

    for (index, (kind, _)) in QUICK_QUERIES.iter().enumerate() {
        transport.push_json(200, json!({ "success": true }));
        run(run_query(&client, *kind, None)).unwrap();
        assert_eq!(query_type_sent(&transport, index), serde_json::to_value(kind).unwrap());
    }
    assert_eq!(transport.request_count(), QUICK_QUERIES.len());
}

#[test]
fn recommendations_carry_the_page_identity() {
    let transport = FakeTransport::replying(200, json!({ "success": true, "games": [] }));
    let client = QueryClient::new(transport.clone(), "/admin/api/ai-query");

    run(run_query(&client, QueryType::Recommendations, Some("admin-7"))).unwrap();

    let RequestBody::Json(body) = &transport.requests()[0].body else {
        panic!("expected json body");
    };
    assert_eq!(body["userId"], "admin-7");
    assert_eq!(body["limit"], 5);
}

#[test]
fn server_error_text_is_surfaced() {
    let transport = FakeTransport::replying(403, json!({ "error": "Admin access required" }));
    let client = QueryClient::new(transport.clone(), "/admin/api/ai-query");

    let err = run(run_query(&client, QueryType::RandomUsers, None)).unwrap_err();

    assert_eq!(err.user_message(), "Admin access required");
}
