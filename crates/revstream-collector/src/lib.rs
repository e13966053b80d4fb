//! Revstream Collector HTTP Service.
//!
//! Receives validated revenue events over authenticated HTTP and appends
//! them to a durable, append-only JSONL log. Also exposes a read endpoint
//! for a user's aggregated balance.
//!
//! # Endpoints
//!
//! - `POST /liveEvent` - shared-secret auth, validate, append one log line
//! - `GET /userEvents/:userid` - query the reconciled balance
//! - `GET /health` - liveness
//!
//! # Log ownership
//!
//! The active log belongs to this service while it accepts writes. The
//! reconciler takes ownership with an atomic rename; the next accepted
//! event simply starts a fresh active file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Axum handlers all return Result
#![allow(clippy::missing_errors_doc)]
// Handlers stay async for router consistency
#![allow(clippy::unused_async)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod log;
pub mod routes;
pub mod state;

pub use config::CollectorConfig;
pub use error::ApiError;
pub use log::{EventLog, LogError};
pub use routes::create_router;
pub use state::AppState;
