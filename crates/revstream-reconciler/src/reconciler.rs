//! The reconciliation job.
//!
//! One run rotates the collector's active log out of the write path with an
//! atomic rename, folds it into per-user net deltas, applies the deltas as a
//! single transaction, and archives the processed file. The rename to the
//! archived name happens only after the commit is confirmed — that rename is
//! the de-duplication boundary: archived files are never folded again, while
//! a file whose transaction rolled back keeps its processing name and is
//! picked up by the next run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;

use revstream_store::RevenueStore;

use crate::config::ReconcilerConfig;
use crate::error::ReconcileError;
use crate::fold;

/// Log file extension, fixed by the pipeline's naming convention.
const LOG_EXTENSION: &str = ".jsonl";

/// What one run accomplished for a single file.
#[derive(Debug)]
pub struct FileReport {
    /// Where the processed file was archived.
    pub archive: PathBuf,
    /// Distinct users whose balances changed.
    pub users: usize,
    /// Valid events folded.
    pub events: u64,
    /// Malformed lines skipped.
    pub skipped: u64,
}

/// Summary of one reconciliation run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// One entry per file folded and archived, in processing order.
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// True when there was nothing to reconcile.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.files.is_empty()
    }
}

/// Converts rotated log files into durable balance updates.
pub struct Reconciler {
    store: Arc<dyn RevenueStore>,
    active_log: PathBuf,
    processed_suffix: String,
}

impl Reconciler {
    /// Create a reconciler over `store` for the configured active log.
    #[must_use]
    pub fn new(store: Arc<dyn RevenueStore>, config: &ReconcilerConfig) -> Self {
        Self {
            store,
            active_log: PathBuf::from(&config.server_events_file),
            processed_suffix: config.processed_suffix.clone(),
        }
    }

    /// Execute one reconciliation run.
    ///
    /// Processing files stranded by an earlier failed run are retried first
    /// (their deltas never committed, so re-folding cannot double-count),
    /// then the active log is rotated and processed. If no file needs work
    /// the run is a clean no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Storage`] if a delta transaction fails (the
    /// file keeps its processing name for retry) and [`ReconcileError::Io`]
    /// if a rename or read fails.
    pub async fn run(&self) -> Result<RunReport, ReconcileError> {
        let mut report = RunReport::default();

        for stranded in self.stranded_processing_files().await? {
            tracing::info!(file = %stranded.display(), "Retrying stranded processing file");
            report.files.push(self.process_file(&stranded).await?);
        }

        let timestamp = chrono::Utc::now().timestamp();
        let processing = self.processing_path(timestamp);

        match fs::rename(&self.active_log, &processing).await {
            Ok(()) => {
                tracing::info!(file = %processing.display(), "Processing file");
                report.files.push(self.process_file(&processing).await?);
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!("No active log; nothing to rotate");
            }
            Err(err) => return Err(err.into()),
        }

        Ok(report)
    }

    /// Fold one processing file, commit its deltas, then archive it.
    async fn process_file(&self, processing: &Path) -> Result<FileReport, ReconcileError> {
        let (deltas, stats) = fold::fold_file(processing).await?;

        // Rollback on failure leaves the file unarchived for the next run.
        self.store.apply_deltas(&deltas).await?;

        let archive = archived_path(processing, &self.processed_suffix);
        fs::rename(processing, &archive).await?;
        tracing::info!(
            file = %archive.display(),
            users = deltas.len(),
            events = stats.events,
            skipped = stats.skipped,
            "Done and renamed to archive"
        );

        Ok(FileReport {
            archive,
            users: deltas.len(),
            events: stats.events,
            skipped: stats.skipped,
        })
    }

    /// The timestamp-qualified name the active log rotates to.
    fn processing_path(&self, timestamp: i64) -> PathBuf {
        let stem = self.active_stem();
        self.active_log
            .with_file_name(format!("{stem}_{timestamp}{LOG_EXTENSION}"))
    }

    /// File stem of the active log ("server_events" for
    /// "server_events.jsonl").
    fn active_stem(&self) -> String {
        self.active_log
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "server_events".to_string())
    }

    /// Processing files left behind by a run that failed before archiving:
    /// `<stem>_<digits>.jsonl` siblings of the active log. Archived files
    /// carry the processed suffix and never match.
    async fn stranded_processing_files(&self) -> std::io::Result<Vec<PathBuf>> {
        let dir = self
            .active_log
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let prefix = format!("{}_", self.active_stem());

        let mut found = Vec::new();
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(found),
            Err(err) => return Err(err),
        };

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(middle) = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(LOG_EXTENSION))
            else {
                continue;
            };
            if !middle.is_empty() && middle.bytes().all(|b| b.is_ascii_digit()) {
                found.push(entry.path());
            }
        }

        found.sort();
        Ok(found)
    }
}

/// Archive name for a processing file: the processed suffix slots in before
/// the extension.
fn archived_path(processing: &Path, suffix: &str) -> PathBuf {
    let stem = processing
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    processing.with_file_name(format!("{stem}{suffix}{LOG_EXTENSION}"))
}
