//! Strongly-typed expense identifier
//!
//! An expense id is any non-empty string. Freshly added expenses get a random
//! v4 UUID and the seed collection uses name-based v5 UUIDs so that reseeding
//! is reproducible, but ids written by other tools (e.g. `1718000000000-3fa9c2`)
//! are kept as they are.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ExpenseError;

const DISPLAY_PREFIX: &str = "exp-";
const SHORT_LEN: usize = 8;

/// Unique identifier of an expense record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Deterministic ID for the seed record at `index`
    pub fn seeded(index: usize) -> Self {
        let name = format!("expense-dashboard/seed/{}", index);
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string())
    }

    /// Parse an ID, rejecting empty or blank strings
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ExpenseError::Validation("Expense id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The full id as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_uuid(&self) -> bool {
        Uuid::parse_str(&self.0).is_ok()
    }

    /// Check whether a user-supplied identifier refers to this ID
    ///
    /// Accepts the full id, or for UUID ids the short display form with or
    /// without its prefix.
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        if identifier.eq_ignore_ascii_case(&self.0) {
            return true;
        }
        if !self.is_uuid() {
            return false;
        }
        let short = identifier.strip_prefix(DISPLAY_PREFIX).unwrap_or(identifier);
        short.len() >= SHORT_LEN && self.0.to_lowercase().starts_with(&short.to_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

/// UUID ids are shown as `exp-` plus their first eight characters; other ids in full
impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_uuid() {
            write!(f, "{}{}", DISPLAY_PREFIX, &self.0[..SHORT_LEN])
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<String> for ExpenseId {
    type Error = ExpenseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ExpenseId> for String {
    fn from(id: ExpenseId) -> Self {
        id.0
    }
}

impl FromStr for ExpenseId {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ExpenseId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, ExpenseId::new());
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12); // "exp-" + 8 chars
    }

    #[test]
    fn test_non_uuid_id_displays_in_full() {
        let id = ExpenseId::parse("1718000000000-abc123").unwrap();
        assert_eq!(id.to_string(), "1718000000000-abc123");
    }

    #[test]
    fn test_seeded_ids_are_stable_and_distinct() {
        assert_eq!(ExpenseId::seeded(3), ExpenseId::seeded(3));
        assert_ne!(ExpenseId::seeded(3), ExpenseId::seeded(4));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = ExpenseId::parse(uuid_str).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid_str));

        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        let legacy: ExpenseId = serde_json::from_str("\"1718000000000-abc123\"").unwrap();
        assert_eq!(legacy.as_str(), "1718000000000-abc123");
    }

    #[test]
    fn test_rejects_empty_ids() {
        assert!(ExpenseId::parse("   ").is_err());
        assert!(serde_json::from_str::<ExpenseId>("\"\"").is_err());
        assert!(serde_json::from_str::<ExpenseId>("42").is_err());
    }

    #[test]
    fn test_matches_full_and_short_forms() {
        let id = ExpenseId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches("exp-550e8400"));
        assert!(id.matches("550E8400"));
        assert!(!id.matches("exp-550e"));
        assert!(!id.matches("exp-deadbeef"));
    }

    #[test]
    fn test_non_uuid_ids_match_only_in_full() {
        let id = ExpenseId::parse("1718000000000-abc123").unwrap();
        assert!(id.matches("1718000000000-abc123"));
        assert!(!id.matches("17180000"));
        assert!(!id.matches("exp-17180000"));
    }
}
