//! Emitter integration tests against a mock collector.

use std::io::Write;

use tempfile::NamedTempFile;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use revstream_emitter::{Emitter, EmitterConfig, EmitterError};

/// Write a source file from raw lines.
fn source_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp source");
    for line in lines {
        writeln!(file, "{line}").expect("failed to write temp source");
    }
    file.flush().expect("failed to flush temp source");
    file
}

fn emitter_for(server: &MockServer, max_concurrent: usize) -> Emitter {
    let config = EmitterConfig {
        events_file: String::new(),
        server_url: server.uri(),
        secret: "secret".into(),
        max_concurrent_requests: max_concurrent,
    };
    Emitter::new(&config).expect("failed to build emitter")
}

#[tokio::test]
async fn delivers_valid_events_with_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/liveEvent"))
        .and(header("Authorization", "secret"))
        .and(body_json(serde_json::json!({
            "userId": "u1", "name": "add_revenue", "value": 100
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_file(&[r#"{"userId":"u1","name":"add_revenue","value":100}"#]);
    let stats = emitter_for(&server, 64).run(source.path()).await.unwrap();

    assert_eq!(stats.delivered, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.skipped, 0);
}

#[tokio::test]
async fn malformed_lines_are_skipped_before_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/liveEvent"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&server)
        .await;

    // The bad line must never reach the collector.
    let source = source_file(&[
        r#"{"userId":"u1","name":"add_revenue","value":100}"#,
        r#"{"userId":"u1","name":"subtract_revenue","value":30}"#,
        r"{bad json",
        r#"{"userId":"u2","name":"add_revenue","value":5}"#,
    ]);
    let stats = emitter_for(&server, 64).run(source.path()).await.unwrap();

    assert_eq!(stats.delivered, 3);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.failed, 0);
}

#[tokio::test]
async fn delivery_failure_does_not_abort_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/liveEvent"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let source = source_file(&[
        r#"{"userId":"u1","name":"add_revenue","value":1}"#,
        r#"{"userId":"u2","name":"add_revenue","value":2}"#,
    ]);
    let stats = emitter_for(&server, 64).run(source.path()).await.unwrap();

    // Both attempted exactly once, both counted as failed, run still Ok.
    assert_eq!(stats.delivered, 0);
    assert_eq!(stats.failed, 2);
}

#[tokio::test]
async fn unauthorized_response_is_failure_not_abort() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/liveEvent"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let source = source_file(&[r#"{"userId":"u1","name":"add_revenue","value":1}"#]);
    let stats = emitter_for(&server, 64).run(source.path()).await.unwrap();

    assert_eq!(stats.failed, 1);
}

#[tokio::test]
async fn partial_final_batch_is_flushed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/liveEvent"))
        .respond_with(ResponseTemplate::new(200))
        .expect(5)
        .mount(&server)
        .await;

    // 5 events with a batch size of 2: two full batches plus a partial one
    // that must still settle before the run returns.
    let lines: Vec<String> = (0..5)
        .map(|i| format!(r#"{{"userId":"u{i}","name":"add_revenue","value":{i}}}"#))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let source = source_file(&refs);

    let stats = emitter_for(&server, 2).run(source.path()).await.unwrap();
    assert_eq!(stats.delivered, 5);
}

#[tokio::test]
async fn final_unterminated_line_is_delivered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/liveEvent"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut file = NamedTempFile::new().unwrap();
    // No trailing newline: stream end counts as line end.
    write!(file, r#"{{"userId":"u1","name":"add_revenue","value":9}}"#).unwrap();
    file.flush().unwrap();

    let stats = emitter_for(&server, 64).run(file.path()).await.unwrap();
    assert_eq!(stats.delivered, 1);
}

#[tokio::test]
async fn missing_source_aborts_the_run() {
    let server = MockServer::start().await;
    let result = emitter_for(&server, 64)
        .run("/nonexistent/events.jsonl")
        .await;

    assert!(matches!(result, Err(EmitterError::Source(_))));
}
