//! Board State Builder: derives per-column ordered id lanes from a flat
//! item list.
//!
//! `BoardState` is derived, never stored: rebuild it whenever the external
//! item list changes. Building is pure and idempotent: the same input always
//! produces the same lanes, and the input slices are never mutated.

use crate::types::{Column, ColumnId, Item, ItemId};

/// Derived mapping of column id → ordered run of item ids ("lane").
///
/// Lanes are kept in column declaration order. Every column has a lane, even
/// when empty, so the render layer can always show a drop zone for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    lanes: Vec<(ColumnId, Vec<ItemId>)>,
}

impl BoardState {
    /// Build the state from the column list and the flat item list.
    ///
    /// Items are grouped by `column_id`; an item whose column is not in
    /// `columns` falls back to the first column. Within a group, items are
    /// stable-sorted by `order` ascending, so colliding `order` values keep
    /// their original list position and rendering stays deterministic.
    pub fn build(columns: &[Column], items: &[Item]) -> Self {
        let mut lanes: Vec<(ColumnId, Vec<&Item>)> = columns
            .iter()
            .map(|c| (c.id.clone(), Vec::new()))
            .collect();

        for item in items {
            // Unknown column: fall back to the first column. With no columns
            // at all the item is simply not tracked.
            let idx = lanes
                .iter()
                .position(|(id, _)| *id == item.column_id)
                .unwrap_or(0);
            if let Some((_, lane)) = lanes.get_mut(idx) {
                lane.push(item);
            }
        }

        let lanes = lanes
            .into_iter()
            .map(|(id, mut grouped)| {
                // Stable sort: ties on `order` keep original list position
                grouped.sort_by_key(|item| item.order);
                (id, grouped.into_iter().map(|item| item.id.clone()).collect())
            })
            .collect();

        Self { lanes }
    }

    /// The ordered item ids of one column, if the column is tracked
    pub fn lane(&self, column: &ColumnId) -> Option<&[ItemId]> {
        self.lanes
            .iter()
            .find(|(id, _)| id == column)
            .map(|(_, lane)| lane.as_slice())
    }

    /// Iterate lanes in column declaration order
    pub fn lanes(&self) -> impl Iterator<Item = (&ColumnId, &[ItemId])> + '_ {
        self.lanes.iter().map(|(id, lane)| (id, lane.as_slice()))
    }

    /// Find the column containing an item. Linear over columns, which stay
    /// small.
    pub fn column_of(&self, item: &ItemId) -> Option<&ColumnId> {
        self.lanes
            .iter()
            .find(|(_, lane)| lane.contains(item))
            .map(|(id, _)| id)
    }

    /// Find an item's column and its index within that column's lane
    pub fn position_of(&self, item: &ItemId) -> Option<(&ColumnId, usize)> {
        self.lanes.iter().find_map(|(id, lane)| {
            lane.iter().position(|x| x == item).map(|idx| (id, idx))
        })
    }

    /// Whether any lane tracks the item
    pub fn contains(&self, item: &ItemId) -> bool {
        self.column_of(item).is_some()
    }

    /// Total number of tracked items across all lanes
    pub fn len(&self) -> usize {
        self.lanes.iter().map(|(_, lane)| lane.len()).sum()
    }

    /// Whether no lane holds any item
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn lane_mut(&mut self, column: &ColumnId) -> Option<&mut Vec<ItemId>> {
        self.lanes
            .iter_mut()
            .find(|(id, _)| id == column)
            .map(|(_, lane)| lane)
    }
}
