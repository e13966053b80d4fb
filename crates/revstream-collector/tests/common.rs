//! Common test utilities for collector integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use revstream_collector::{create_router, AppState, CollectorConfig};
use revstream_store::MemoryStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The in-memory store backing the query endpoint.
    pub store: Arc<MemoryStore>,
    /// Path of the active event log.
    pub log_path: PathBuf,
    /// The configured shared secret.
    pub secret: String,
    /// Temporary directory for the log (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh log directory and store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("server_events.jsonl");
        let secret = "test-secret".to_string();

        let config = CollectorConfig {
            listen_addr: "127.0.0.1:0".into(),
            secret: secret.clone(),
            server_events_file: log_path.to_string_lossy().to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone(), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            store,
            log_path,
            secret,
            _temp_dir: temp_dir,
        }
    }

    /// Lines currently in the active log, or empty if it was never written.
    pub fn log_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log_path)
            .map(|contents| contents.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
