//! Emitter error types.

/// Errors that abort an emitter run.
///
/// Individual delivery failures are *not* here: they are logged and counted
/// but never fatal. Only source-level I/O problems stop a run.
#[derive(Debug, thiserror::Error)]
pub enum EmitterError {
    /// The event source could not be opened or read.
    #[error("source read error: {0}")]
    Source(#[from] std::io::Error),

    /// The client could not be constructed from its configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
