//! Core types for the board engine

mod column;
mod ids;
mod item;
mod record;

// Re-export all types
pub use column::Column;
pub use ids::{ColumnId, ItemId};
pub use item::Item;
pub use record::MoveRecord;
