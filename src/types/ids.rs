//! Identifier newtypes for board entities.
//!
//! Ids are opaque strings assigned by the external backend; the engine never
//! generates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one resume artifact (card) on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap a backend-assigned identifier
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifies a pipeline stage (column) on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Wrap a backend-assigned identifier
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_roundtrip() {
        let id = ItemId::from_string("r1");
        assert_eq!(id.as_str(), "r1");
        assert_eq!(id.to_string(), "r1");
        assert_eq!(id, "r1".into());
    }

    #[test]
    fn test_ids_serialize_transparent() {
        let id = ColumnId::from_string("interview");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"interview\"");

        let parsed: ColumnId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
