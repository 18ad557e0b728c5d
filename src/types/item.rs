//! Item type: a draggable resume artifact

use super::ids::{ColumnId, ItemId};
use serde::{Deserialize, Serialize};

/// A draggable card representing one resume artifact.
///
/// Items are created by the external backend (default column = the board's
/// first column, order by creation sequence) and mutated only by the move
/// resolver. Tag editing is a collaborator's concern; tags are carried here
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub column_id: ColumnId,
    /// 1-based position within the column. Unique per column; renumbered to
    /// `1..=N` after every resolved move.
    pub order: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Create a new item in the given column at the given order
    pub fn new(id: impl Into<ItemId>, column_id: impl Into<ColumnId>, order: u32) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            order,
            tags: Vec::new(),
        }
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
