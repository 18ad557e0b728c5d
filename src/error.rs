//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur on the non-drag API surface.
///
/// The drag flow itself never returns these: invalid or stale drop targets
/// abort silently, because a drag gesture can outlive a concurrent external
/// data refresh.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A board needs at least one column; the first column is the fallback
    /// target for items with an unknown column id.
    #[error("board has no columns")]
    NoColumns,

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Item not found
    #[error("item not found: {id}")]
    ItemNotFound { id: String },
}

impl BoardError {
    /// Create a column-not-found error
    pub fn column_not_found(id: impl Into<String>) -> Self {
        Self::ColumnNotFound { id: id.into() }
    }

    /// Create an item-not-found error
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound { id: id.into() }
    }
}
