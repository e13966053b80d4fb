//! Revenue-adjustment events.
//!
//! An [`Event`] is the sole domain entity moving through the pipeline. A line
//! of the event source (or of the collector's log) is well-formed iff it
//! decodes into an [`Event`]: a non-empty `userId`, a recognized `name`, and
//! an integer `value`. Decoding *is* validation — there is no separate
//! ad-hoc check downstream, so every stage shares one notion of
//! well-formedness.

use serde::{Deserialize, Serialize};

use crate::error::EventError;
use crate::ids::UserId;

/// The kind of revenue adjustment an event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    /// Add `value` to the user's running revenue.
    AddRevenue,
    /// Subtract `value` from the user's running revenue.
    SubtractRevenue,
}

/// A single revenue-adjustment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// The user whose revenue is adjusted.
    pub user_id: UserId,
    /// Which direction the adjustment goes.
    pub name: EventName,
    /// Adjustment magnitude; the sign is implied by `name`.
    pub value: i64,
}

impl Event {
    /// Decode one JSON record.
    ///
    /// Success implies the event is well-formed; any schema violation
    /// (missing field, wrong type, unrecognized name, non-integer value,
    /// empty user id) surfaces as [`EventError::Malformed`].
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Malformed`] when the line is not a well-formed
    /// event record.
    pub fn parse(line: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(line)?)
    }

    /// Serialize the event as a single JSON log line (no trailing newline).
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Serialize`] if serialization fails.
    pub fn to_log_line(&self) -> Result<String, EventError> {
        serde_json::to_string(self).map_err(EventError::Serialize)
    }

    /// The signed contribution of this event to its user's balance:
    /// `+value` for `add_revenue`, `-value` for `subtract_revenue`.
    #[must_use]
    pub const fn signed_delta(&self) -> i64 {
        match self.name {
            EventName::AddRevenue => self.value,
            EventName::SubtractRevenue => -self.value,
        }
    }
}
