//! In-memory revenue store for tests.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use revstream_core::{UserId, UserRevenue};

use crate::error::Result;
use crate::RevenueStore;

/// A [`RevenueStore`] backed by an in-memory map.
///
/// Deltas are applied by building the updated map first and swapping it in,
/// so `apply_deltas` is atomic the same way the Postgres transaction is.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<BTreeMap<UserId, i64>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a balance directly, bypassing reconciliation.
    pub async fn seed(&self, user_id: UserId, revenue: i64) {
        self.rows.write().await.insert(user_id, revenue);
    }

    /// Snapshot every row, ordered by user id.
    pub async fn all_rows(&self) -> Vec<UserRevenue> {
        self.rows
            .read()
            .await
            .iter()
            .map(|(user_id, revenue)| UserRevenue {
                user_id: user_id.clone(),
                revenue: *revenue,
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RevenueStore for MemoryStore {
    async fn get_user_revenue(&self, user_id: &UserId) -> Result<Option<UserRevenue>> {
        Ok(self
            .rows
            .read()
            .await
            .get(user_id)
            .map(|revenue| UserRevenue {
                user_id: user_id.clone(),
                revenue: *revenue,
            }))
    }

    async fn apply_deltas(&self, deltas: &BTreeMap<UserId, i64>) -> Result<()> {
        let mut rows = self.rows.write().await;
        let mut updated = rows.clone();
        for (user_id, delta) in deltas {
            *updated.entry(user_id.clone()).or_insert(0) += delta;
        }
        *rows = updated;
        Ok(())
    }
}
