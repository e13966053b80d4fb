//! Reconciler error types.

use revstream_store::StoreError;

/// Errors that abort a reconciliation run.
///
/// A storage failure leaves the processing file unarchived, so the next run
/// re-folds it from scratch; an I/O failure aborts without corrupting state
/// because renames are atomic.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// A rename or read of the log file failed.
    #[error("log file i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The delta transaction failed and rolled back.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
