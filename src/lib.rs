//! Drag-and-drop reordering engine for a resume pipeline board
//!
//! This crate turns free-form pointer/keyboard drag gestures into consistent,
//! gap-free per-column orderings for a kanban-style board of resume artifacts.
//! It consumes a flat item list and a column list, keeps the local view
//! optimistically correct, and forwards each resolved move to an external
//! backend as a normalized batch, fire-and-forget.
//!
//! ## Overview
//!
//! - **One `Board` = one pipeline** - columns are static for the session
//! - **Derived state** - per-column orderings are rebuilt from the flat item
//!   list on every refresh, never stored
//! - **Contiguous orders** - affected columns are renumbered `1..=N` after
//!   every resolved move, so repeated partial updates cannot drift
//! - **Forgiving drags** - stale or invalid drop targets abort silently; a
//!   drag can outlive a concurrent data refresh without raising errors
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use resume_board::{async_trait, Board, Column, DropTarget, Item, MoveRecord, MoveSink};
//! use std::sync::Arc;
//!
//! struct Backend;
//!
//! #[async_trait]
//! impl MoveSink for Backend {
//!     async fn persist_moves(
//!         &self,
//!         moves: Vec<MoveRecord>,
//!     ) -> Result<(), resume_board::SinkError> {
//!         // POST the batch to the server
//!         Ok(())
//!     }
//! }
//!
//! # fn example() -> Result<(), resume_board::BoardError> {
//! let columns = vec![
//!     Column::new("screen", "Screening"),
//!     Column::new("interview", "Interview"),
//! ];
//! let mut board = Board::new(columns, Arc::new(Backend))?;
//! board.set_items(vec![Item::new("r1", "screen", 1), Item::new("r2", "screen", 2)]);
//!
//! // Keyboard path: drop r2 onto the interview column's empty zone.
//! board.drag_start(&"r2".into());
//! board.drag_end(Some(DropTarget::Column("interview".into())));
//! # Ok(())
//! # }
//! ```
//!
//! The pointer path goes through [`DropMap`]: the render layer registers the
//! rectangle of every droppable card and column zone each frame, and the
//! engine hit-tests the release position against it. No UI-framework hook is
//! required.

mod error;

pub mod board;
pub mod dispatch;
pub mod drag;
pub mod resolve;
pub mod state;
pub mod types;

// Re-export so sink implementors don't need a direct async-trait dependency
pub use async_trait::async_trait;

pub use board::Board;
pub use dispatch::{Dispatcher, MoveSink, SinkError};
pub use drag::{DragController, DragSession, DropMap, DropTarget, Point, Rect};
pub use error::{BoardError, Result};
pub use state::BoardState;
pub use types::{Column, ColumnId, Item, ItemId, MoveRecord};
