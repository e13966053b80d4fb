//! Application state.

use std::sync::Arc;

use revstream_store::RevenueStore;

use crate::config::CollectorConfig;
use crate::log::EventLog;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The active append-only event log.
    pub log: Arc<EventLog>,

    /// The storage backend for the balance query endpoint.
    pub store: Arc<dyn RevenueStore>,

    /// Service configuration.
    pub config: CollectorConfig,
}

impl AppState {
    /// Create a new application state. The event log targets the configured
    /// `server_events_file`.
    #[must_use]
    pub fn new(store: Arc<dyn RevenueStore>, config: CollectorConfig) -> Self {
        let log = Arc::new(EventLog::new(&config.server_events_file));
        Self { log, store, config }
    }
}
