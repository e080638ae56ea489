//! Identity types for Homestead entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Identifier of a property listing.
/// Positive, unique within a catalog and stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(u64);

impl PropertyId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PropertyId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PropertyId {
    type Err = std::num::ParseIntError;

    /// Parses route-style identifiers such as `"12"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Identifier of a favorite entry.
/// Assigned by the favorites store as `1 + max(existing)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(u64);

impl FavoriteId {
    /// First identifier handed out by an empty store.
    pub const FIRST: FavoriteId = FavoriteId(1);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_id_parses_route_param() {
        assert_eq!("12".parse::<PropertyId>().unwrap(), PropertyId::new(12));
        assert_eq!(" 7 ".parse::<PropertyId>().unwrap(), PropertyId::new(7));
        assert!("abc".parse::<PropertyId>().is_err());
    }

    #[test]
    fn test_property_id_serializes_as_number() {
        let json = serde_json::to_string(&PropertyId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: PropertyId = serde_json::from_str("42").unwrap();
        assert_eq!(back, PropertyId::new(42));
    }

    #[test]
    fn test_favorite_id_next() {
        assert_eq!(FavoriteId::FIRST.get(), 1);
        assert_eq!(FavoriteId::new(9).next(), FavoriteId::new(10));
    }
}
