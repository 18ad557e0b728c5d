//! Move Resolver: turns a drag-end into renumbered lanes and a move batch.
//!
//! Resolution mutates the lanes and the item arena synchronously (the
//! optimistic local update) and emits the normalized batch the dispatcher
//! forwards to the backend. Affected columns are always renumbered in full,
//! `1..=N`, so repeated partial updates can never leave gaps or duplicates.
//!
//! The resolver is deliberately forgiving: a stale active id, an unknown
//! target, or a drop of an item onto itself returns `None` and mutates
//! nothing. Drag events can outlive a concurrent external data refresh, and
//! that must never surface as an error.

use crate::drag::DropTarget;
use crate::state::BoardState;
use crate::types::{ColumnId, Item, ItemId, MoveRecord};
use std::collections::HashMap;

/// Resolve a drag-end into updated lanes, an updated arena, and one move
/// batch. Returns `None`, with zero mutation, when the move is a no-op or
/// cannot be resolved.
///
/// Same-column moves emit one batch covering every item in the column;
/// cross-column moves cover the full source and target columns, source
/// entries first.
pub fn resolve_move(
    items: &mut HashMap<ItemId, Item>,
    state: &mut BoardState,
    active: &ItemId,
    over: &DropTarget,
) -> Option<Vec<MoveRecord>> {
    if let DropTarget::Item(id) = over {
        if id == active {
            return None;
        }
    }

    // Stale/ghost active id: the external list may have refreshed mid-drag
    let (source, from_idx) = {
        let (column, idx) = state.position_of(active)?;
        (column.clone(), idx)
    };

    let target = match over {
        DropTarget::Item(id) => state.column_of(id)?.clone(),
        DropTarget::Column(id) => {
            state.lane(id)?;
            id.clone()
        }
    };

    if target == source {
        let lane = state.lane_mut(&source)?;
        let moved = lane.remove(from_idx);
        let insert_at = insertion_index(lane, over);
        lane.insert(insert_at, moved);

        tracing::debug!(item = %active, column = %source, "resolved same-column move");
        Some(renumber(items, state, &source))
    } else {
        let moved = state.lane_mut(&source)?.remove(from_idx);
        let lane = state.lane_mut(&target)?;
        let insert_at = insertion_index(lane, over);
        lane.insert(insert_at, moved);

        tracing::debug!(
            item = %active,
            from = %source,
            to = %target,
            "resolved cross-column move"
        );
        let mut batch = renumber(items, state, &source);
        batch.extend(renumber(items, state, &target));
        Some(batch)
    }
}

/// Index to insert the dragged item at, measured against the lane with the
/// item already removed: before the over-card, or at the end for the column
/// zone (and for an over-card that left the lane in the meantime).
fn insertion_index(lane: &[ItemId], over: &DropTarget) -> usize {
    match over {
        DropTarget::Item(id) => lane.iter().position(|x| x == id).unwrap_or(lane.len()),
        DropTarget::Column(_) => lane.len(),
    }
}

/// Renumber one column's lane to contiguous 1-based orders, write the new
/// positions back into the arena, and emit the column's batch entries.
fn renumber(
    items: &mut HashMap<ItemId, Item>,
    state: &BoardState,
    column: &ColumnId,
) -> Vec<MoveRecord> {
    let lane = state.lane(column).unwrap_or(&[]);
    let mut records = Vec::with_capacity(lane.len());

    for (idx, id) in lane.iter().enumerate() {
        let order = (idx + 1) as u32;
        if let Some(item) = items.get_mut(id) {
            item.column_id = column.clone();
            item.order = order;
        }
        records.push(MoveRecord::new(id.clone(), column.clone(), order));
    }

    records
}
