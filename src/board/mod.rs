//! Board facade: single-writer owner of the item arena and derived state.
//!
//! The board holds an arena of item records indexed by id plus the derived
//! per-column lanes, recomputed only when the input item list changes, not
//! on every draw. All mutation flows through the drag-end path: controller
//! resolves the target, the resolver rewrites lanes and arena synchronously
//! (the optimistic update), and the dispatcher fires the batch at the
//! backend without awaiting it.

use crate::dispatch::{Dispatcher, MoveSink};
use crate::drag::{DragController, DragSession, DropMap, DropTarget, Point};
use crate::error::{BoardError, Result};
use crate::resolve::resolve_move;
use crate::state::BoardState;
use crate::types::{Column, ColumnId, Item, ItemId};
use std::collections::HashMap;
use std::sync::Arc;

/// The full board: columns, items, derived state, and the drag machinery.
pub struct Board {
    columns: Vec<Column>,
    items: HashMap<ItemId, Item>,
    state: BoardState,
    controller: DragController,
    dispatcher: Dispatcher,
}

impl Board {
    /// Create a board over the given pipeline stages.
    ///
    /// At least one column is required; the first column is the fallback
    /// target for items with an unknown column id.
    pub fn new(columns: Vec<Column>, sink: Arc<dyn MoveSink>) -> Result<Self> {
        if columns.is_empty() {
            return Err(BoardError::NoColumns);
        }

        let state = BoardState::build(&columns, &[]);
        Ok(Self {
            columns,
            items: HashMap::new(),
            state,
            controller: DragController::new(),
            dispatcher: Dispatcher::new(sink),
        })
    }

    /// Replace the item list and rebuild the derived state.
    ///
    /// This is the external refresh path: items no longer in the list drop
    /// out of the derived state, and a drag that outlives the refresh
    /// resolves as a silent no-op.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.state = BoardState::build(&self.columns, &items);
        self.items = items.into_iter().map(|i| (i.id.clone(), i)).collect();
    }

    /// The board's columns, in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The derived per-column orderings
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Iterate all item records, in no particular order. Per-column ordering
    /// lives in [`Board::state`].
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }

    /// Look up an item record
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Look up an item record, erroring when absent.
    pub fn require_item(&self, id: &ItemId) -> Result<&Item> {
        self.items
            .get(id)
            .ok_or_else(|| BoardError::item_not_found(id.as_str()))
    }

    /// Look up a column, erroring when absent.
    pub fn require_column(&self, id: &ColumnId) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| BoardError::column_not_found(id.as_str()))
    }

    /// The in-flight drag session, if any
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.controller.session()
    }

    /// Whether a drag is in flight
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Begin a drag on the given item. Returns false when no lane tracks it.
    pub fn drag_start(&mut self, id: &ItemId) -> bool {
        self.controller.start(&self.state, id)
    }

    /// Hit-test the pointer during a drag. Pure; mutates nothing.
    pub fn drag_target(&self, point: Point, map: &DropMap) -> Option<DropTarget> {
        self.controller.target_at(point, map)
    }

    /// End the drag on an explicit target (the keyboard path).
    ///
    /// Applies the resolved move synchronously, then dispatches the batch
    /// fire-and-forget. Aborts (no mutation, no dispatch) when the target
    /// is absent, is the dragged item itself, or nothing valid resolves.
    pub fn drag_end(&mut self, over: Option<DropTarget>) {
        let Some((active, over)) = self.controller.end(over) else {
            return;
        };
        let Some(batch) = resolve_move(&mut self.items, &mut self.state, &active, &over) else {
            return;
        };
        self.dispatcher.dispatch(batch);
    }

    /// End the drag at a pointer position (the pointer path): hit-test the
    /// release point, then drop there.
    pub fn drag_end_at(&mut self, point: Point, map: &DropMap) {
        let over = map.nearest(point);
        self.drag_end(over);
    }

    /// Release the drag outside any valid target: zero mutation, zero
    /// dispatch.
    pub fn drag_cancel(&mut self) {
        self.controller.cancel();
    }
}
