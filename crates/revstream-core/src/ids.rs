//! Identifier types for revstream.
//!
//! User identifiers are opaque strings supplied by the event source. The only
//! structural requirement is non-emptiness, which is enforced at
//! deserialization time so a decoded [`UserId`] is always valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error produced when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier string was empty.
    #[error("user id must be a non-empty string")]
    Empty,
}

/// An opaque, non-empty user identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for UserId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(value))
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        let id: UserId = "user1".parse().unwrap();
        assert_eq!(id.as_str(), "user1");
        assert_eq!(id.to_string(), "user1");
    }

    #[test]
    fn empty_id_rejected() {
        assert_eq!("".parse::<UserId>(), Err(IdError::Empty));
        assert_eq!(UserId::try_from(String::new()), Err(IdError::Empty));
    }

    #[test]
    fn deserialize_rejects_empty() {
        let err = serde_json::from_str::<UserId>("\"\"");
        assert!(err.is_err());
    }
}
