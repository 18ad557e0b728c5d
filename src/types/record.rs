//! Move record: the persisted (item, column, order) triple

use super::ids::{ColumnId, ItemId};
use serde::{Deserialize, Serialize};

/// One entry of a normalized move batch, in the backend's wire format.
///
/// Field names match the persistence endpoint exactly:
/// `{"resume_id", "kanban_column_id", "kanban_order"}`. A batch covers every
/// item of each affected column so the backend always receives a complete,
/// gap-free ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveRecord {
    pub resume_id: ItemId,
    pub kanban_column_id: ColumnId,
    pub kanban_order: u32,
}

impl MoveRecord {
    /// Create a new move record
    pub fn new(resume_id: ItemId, kanban_column_id: ColumnId, kanban_order: u32) -> Self {
        Self {
            resume_id,
            kanban_column_id,
            kanban_order,
        }
    }
}
