//! Collector service configuration.

/// Collector configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Address to listen on (default: "0.0.0.0:8000", port from
    /// `EVENT_SERVER_PORT`).
    pub listen_addr: String,

    /// Shared secret expected in the `Authorization` header.
    pub secret: String,

    /// Path of the active event log (default: "server_events.jsonl").
    pub server_events_file: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl CollectorConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let port = std::env::var("EVENT_SERVER_PORT").unwrap_or_else(|_| "8000".into());
        Self {
            listen_addr: format!("0.0.0.0:{port}"),
            secret: std::env::var("SECRET_VALUE").unwrap_or_else(|_| "secret".into()),
            server_events_file: std::env::var("SERVER_EVENTS_FILE")
                .unwrap_or_else(|_| "server_events.jsonl".into()),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".into(),
            secret: "secret".into(),
            server_events_file: "server_events.jsonl".into(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        }
    }
}
