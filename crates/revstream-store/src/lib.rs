//! Storage layer for revstream user revenue.
//!
//! This crate owns the `users_revenue` projection: one row per user, keyed
//! uniquely by `user_id`, holding the signed running sum of all accepted
//! revenue deltas.
//!
//! # Write model
//!
//! Only the reconciler writes, through [`RevenueStore::apply_deltas`]: a
//! single atomic transaction of per-user upserts. If any upsert fails the
//! whole batch rolls back and no partial deltas are visible. The collector's
//! query endpoint reads concurrently through
//! [`RevenueStore::get_user_revenue`].
//!
//! Two implementations are provided: [`PgRevenueStore`] (Postgres, via sqlx)
//! for production and [`MemoryStore`] for tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod memory;
pub mod postgres;

pub use config::DbConfig;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use postgres::PgRevenueStore;

use std::collections::BTreeMap;

use revstream_core::{UserId, UserRevenue};

/// The storage trait for the revenue projection.
///
/// Abstracts the relational backend so handlers and the reconciler can be
/// exercised against an in-memory implementation in tests.
#[async_trait::async_trait]
pub trait RevenueStore: Send + Sync {
    /// Fetch a user's current revenue row, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    async fn get_user_revenue(&self, user_id: &UserId) -> Result<Option<UserRevenue>>;

    /// Apply per-user net deltas as one atomic transaction.
    ///
    /// Each delta upserts: absent users get a new row with `revenue = delta`,
    /// existing users are incremented by `delta`. All-or-nothing — on error
    /// no row reflects a partial update.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails; nothing is committed.
    async fn apply_deltas(&self, deltas: &BTreeMap<UserId, i64>) -> Result<()>;
}
