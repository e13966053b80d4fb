//! The storage-side revenue projection.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A user's running revenue balance, keyed uniquely by `userId`.
///
/// Created on the first accepted event for a user and incremented by every
/// reconciliation cycle that includes that user; never deleted by the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRevenue {
    /// The user this balance belongs to.
    pub user_id: UserId,
    /// Signed running sum of all accepted deltas.
    pub revenue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_key() {
        let row = UserRevenue {
            user_id: "u1".parse().unwrap(),
            revenue: 70,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({"userId": "u1", "revenue": 70}));
    }
}
