//! Column type: a named pipeline stage

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// A column is a named pipeline stage holding an ordered run of items.
///
/// Columns are static for the session; the engine never reorders or edits
/// them. The first column in the list doubles as the fallback target for
/// items whose column id is unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub label: String,
}

impl Column {
    /// Create a new column with the given id and display label
    pub fn new(id: impl Into<ColumnId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
