//! `POST /liveEvent` integration tests.

mod common;

use common::TestHarness;
use serde_json::json;

use revstream_core::Event;

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn missing_auth_header_is_unauthorized_and_log_untouched() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/liveEvent")
        .json(&json!({"userId": "u1", "name": "add_revenue", "value": 100}))
        .await;

    response.assert_status_unauthorized();
    assert!(harness.log_lines().is_empty());
}

#[tokio::test]
async fn wrong_secret_is_unauthorized() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/liveEvent")
        .add_header("authorization", "not-the-secret")
        .json(&json!({"userId": "u1", "name": "add_revenue", "value": 100}))
        .await;

    response.assert_status_unauthorized();
    assert!(harness.log_lines().is_empty());
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn invalid_payload_is_bad_request_and_nothing_written() {
    let harness = TestHarness::new();

    let invalid = [
        json!({"userId": "u1", "name": "add_revenue"}),
        json!({"userId": "u1", "name": "multiply_revenue", "value": 5}),
        json!({"userId": "", "name": "add_revenue", "value": 5}),
        json!({"userId": "u1", "name": "add_revenue", "value": 5.5}),
        json!({"userId": "u1", "name": "add_revenue", "value": "5"}),
    ];

    for payload in invalid {
        let response = harness
            .server
            .post("/liveEvent")
            .add_header("authorization", harness.secret.clone())
            .json(&payload)
            .await;
        response.assert_status_bad_request();
    }

    assert!(harness.log_lines().is_empty());
}

#[tokio::test]
async fn non_json_body_is_bad_request() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/liveEvent")
        .add_header("authorization", harness.secret.clone())
        .text("not json")
        .await;

    response.assert_status_bad_request();
    assert!(harness.log_lines().is_empty());
}

// ============================================================================
// Append
// ============================================================================

#[tokio::test]
async fn valid_event_is_accepted_and_appended() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/liveEvent")
        .add_header("authorization", harness.secret.clone())
        .json(&json!({"userId": "u1", "name": "add_revenue", "value": 100}))
        .await;

    response.assert_status_ok();

    let lines = harness.log_lines();
    assert_eq!(lines.len(), 1);
    let event = Event::parse(&lines[0]).expect("log line must round-trip");
    assert_eq!(event.user_id.as_str(), "u1");
    assert_eq!(event.signed_delta(), 100);
}

#[tokio::test]
async fn appends_preserve_arrival_order() {
    let harness = TestHarness::new();

    let payloads = [
        json!({"userId": "u1", "name": "add_revenue", "value": 100}),
        json!({"userId": "u1", "name": "subtract_revenue", "value": 30}),
        json!({"userId": "u2", "name": "add_revenue", "value": 5}),
    ];

    for payload in &payloads {
        harness
            .server
            .post("/liveEvent")
            .add_header("authorization", harness.secret.clone())
            .json(payload)
            .await
            .assert_status_ok();
    }

    let lines = harness.log_lines();
    assert_eq!(lines.len(), 3);
    let deltas: Vec<i64> = lines
        .iter()
        .map(|l| Event::parse(l).unwrap().signed_delta())
        .collect();
    assert_eq!(deltas, vec![100, -30, 5]);
}
