//! Revstream Emitter.
//!
//! Reads a newline-delimited file of revenue-adjustment events, validates
//! each record, and delivers the valid ones to the collector over
//! authenticated HTTP. Concurrency is gated by a strict batch policy: at
//! most `MAX_CONCURRENT_REQUESTS` deliveries are in flight, and a batch must
//! fully settle before the next one starts.
//!
//! Delivery is best-effort, at-least-once: a failed delivery is logged and
//! counted, never retried; a malformed source line is skipped before it is
//! ever sent.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod emitter;
pub mod error;

pub use batch::BatchGate;
pub use config::{EmitterConfig, DEFAULT_MAX_CONCURRENT_REQUESTS};
pub use emitter::{Emitter, EmitterStats};
pub use error::EmitterError;
