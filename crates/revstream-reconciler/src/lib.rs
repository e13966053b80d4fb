//! Revstream Reconciler.
//!
//! Periodically (externally triggered, single instance) converts the
//! collector's append-only log into durable per-user balances:
//!
//! 1. Atomically rename the active log to a timestamped processing file —
//!    the hand-off barrier that removes it from the collector's write path.
//! 2. Stream the processing file and fold valid events into per-user net
//!    deltas; malformed lines are skipped, never fatal.
//! 3. Apply the deltas as one atomic upsert transaction.
//! 4. Only after the commit: rename the processing file to its archived
//!    name. Archived files are never folded again; a file whose
//!    transaction rolled back is retried wholesale on the next run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod fold;
pub mod reconciler;

pub use config::ReconcilerConfig;
pub use error::ReconcileError;
pub use fold::{fold_file, fold_reader, FoldStats};
pub use reconciler::{FileReport, Reconciler, RunReport};
