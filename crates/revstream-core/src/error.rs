//! Error types for revstream-core.

use crate::ids::IdError;

/// Errors that can occur when decoding or encoding events.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// The record failed to decode as a well-formed event.
    #[error("malformed event record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The event could not be serialized back to a log line.
    #[error("event serialization failed: {0}")]
    Serialize(serde_json::Error),

    /// An identifier violated its structural invariant.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}
