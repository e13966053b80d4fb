//! Postgres-backed revenue store.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::collections::BTreeMap;

use revstream_core::{UserId, UserRevenue};

use crate::config::DbConfig;
use crate::error::Result;
use crate::RevenueStore;

/// Maximum pool connections. The pipeline is low-fanout: the collector only
/// reads and the reconciler runs single-instance.
const MAX_CONNECTIONS: u32 = 5;

/// Postgres implementation of [`RevenueStore`].
#[derive(Debug, Clone)]
pub struct PgRevenueStore {
    pool: PgPool,
}

impl PgRevenueStore {
    /// Create a store with a lazily-connecting pool.
    ///
    /// No connection is attempted until the first query, so a process can
    /// start before the database is reachable.
    #[must_use]
    pub fn connect_lazy(config: &DbConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database);

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Create a store from an existing pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users_revenue` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL statement fails.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users_revenue (
                 user_id TEXT PRIMARY KEY,
                 revenue BIGINT NOT NULL
             )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Access the underlying pool, for custom queries in tests or tooling.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl RevenueStore for PgRevenueStore {
    async fn get_user_revenue(&self, user_id: &UserId) -> Result<Option<UserRevenue>> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT revenue FROM users_revenue WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(revenue,)| UserRevenue {
            user_id: user_id.clone(),
            revenue,
        }))
    }

    async fn apply_deltas(&self, deltas: &BTreeMap<UserId, i64>) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for (user_id, delta) in deltas {
            tracing::debug!(user_id = %user_id, delta, "Upserting revenue delta");
            sqlx::query(
                "INSERT INTO users_revenue (user_id, revenue)
                 VALUES ($1, $2)
                 ON CONFLICT (user_id) DO UPDATE
                 SET revenue = users_revenue.revenue + EXCLUDED.revenue",
            )
            .bind(user_id.as_str())
            .bind(*delta)
            .execute(&mut *tx)
            .await?;
        }

        // A failed upsert above propagates before this point; dropping the
        // transaction rolls everything back, so no partial deltas commit.
        tx.commit().await?;

        Ok(())
    }
}
