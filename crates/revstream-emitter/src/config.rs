//! Emitter configuration.

/// Default cap on in-flight delivery requests.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 64;

/// Emitter configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Path to the newline-delimited event source (default: "events.jsonl").
    pub events_file: String,

    /// Base URL of the collector (default: derived from `EVENT_SERVER_PORT`).
    pub server_url: String,

    /// Shared secret sent in the `Authorization` header.
    pub secret: String,

    /// Maximum deliveries in flight at once (default: 64).
    pub max_concurrent_requests: usize,
}

impl EmitterConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let port = std::env::var("EVENT_SERVER_PORT").unwrap_or_else(|_| "8000".into());
        Self {
            events_file: std::env::var("EVENTS_FILE").unwrap_or_else(|_| "events.jsonl".into()),
            server_url: std::env::var("EVENT_SERVER_URL")
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
            secret: std::env::var("SECRET_VALUE").unwrap_or_else(|_| "secret".into()),
            max_concurrent_requests: std::env::var("MAX_CONCURRENT_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONCURRENT_REQUESTS),
        }
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            events_file: "events.jsonl".into(),
            server_url: "http://localhost:8000".into(),
            secret: "secret".into(),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }
}
