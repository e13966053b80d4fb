//! The active append-only event log.
//!
//! One JSON event per line. A line is the durability granularity: it is
//! either fully written or never observed by a reader. The file is
//! opened-appended-closed per write so an external atomic rename (the
//! reconciler's rotation) removes it from the write path immediately — the
//! next append recreates a fresh active file.

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use revstream_core::{Event, EventError};

/// Errors raised while appending to the log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The event could not be serialized to a log line.
    #[error("event encoding failed: {0}")]
    Encode(#[from] EventError),

    /// The append itself failed.
    #[error("log append failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only writer for the active event log.
#[derive(Debug)]
pub struct EventLog {
    path: PathBuf,
    // Serializes appends so concurrent requests never interleave lines.
    write_lock: Mutex<()>,
}

impl EventLog {
    /// Create a writer targeting `path`. The file is created on first
    /// append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event as a complete, newline-terminated JSON line.
    ///
    /// The line is serialized before any I/O happens, so a failure can never
    /// leave a partial line behind.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Encode`] if the event cannot be serialized and
    /// [`LogError::Io`] if the write fails.
    pub async fn append(&self, event: &Event) -> Result<(), LogError> {
        let mut line = event.to_log_line()?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
