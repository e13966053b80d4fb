//! Error types for revstream storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed. Any failure inside `apply_deltas` means
    /// the whole transaction rolled back.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration was invalid (bad connection parameters, etc.).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
