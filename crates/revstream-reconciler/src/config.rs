//! Reconciler configuration.

/// Reconciler configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Path of the collector's active event log
    /// (default: "server_events.jsonl").
    pub server_events_file: String,

    /// Suffix marking a processing file as archived
    /// (default: "_processed").
    pub processed_suffix: String,
}

impl ReconcilerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server_events_file: std::env::var("SERVER_EVENTS_FILE")
                .unwrap_or_else(|_| "server_events.jsonl".into()),
            processed_suffix: std::env::var("PROCESSED_FILE_SUFFIX")
                .unwrap_or_else(|_| "_processed".into()),
        }
    }
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            server_events_file: "server_events.jsonl".into(),
            processed_suffix: "_processed".into(),
        }
    }
}
