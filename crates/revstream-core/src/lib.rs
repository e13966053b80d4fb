//! Core types for the revstream event pipeline.
//!
//! This crate provides the domain types shared by the emitter, collector,
//! and reconciler:
//!
//! - **Identifiers**: [`UserId`]
//! - **Events**: [`Event`], [`EventName`]
//! - **Projections**: [`UserRevenue`]
//!
//! # Well-formedness
//!
//! Validation is a schema-checked decode: [`Event::parse`] either yields a
//! typed event or an [`EventError`]. All three pipeline stages use the same
//! decode, so a record accepted anywhere is accepted everywhere.
//!
//! Revenue values are stored as `i64` (whole units) to avoid floating point
//! precision issues.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod event;
pub mod ids;
pub mod revenue;

pub use error::EventError;
pub use event::{Event, EventName};
pub use ids::{IdError, UserId};
pub use revenue::UserRevenue;
