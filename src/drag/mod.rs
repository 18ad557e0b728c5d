//! Drag Controller: session state machine and hit testing.
//!
//! The controller turns raw pointer/keyboard input into start/move/end
//! events and a resolved drop target. It owns exactly one piece of state,
//! the ephemeral [`DragSession`], and moves between two states: idle and
//! dragging. Every drag-end returns to idle unconditionally: success,
//! no-op, or abort.
//!
//! Hit testing is an explicit primitive: the render layer registers the
//! rectangle of every droppable card and column zone in a [`DropMap`], and
//! [`DropMap::nearest`] maps a pointer position to the closest target. No
//! UI-framework pointer-capture or collision-detection hook is involved.

use crate::state::BoardState;
use crate::types::{ColumnId, ItemId};

/// Where a drag may drop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Drop on a card: the dragged item is inserted before this card.
    Item(ItemId),
    /// Drop on a column's reserved zone (its empty area): the dragged item
    /// is appended to the column.
    Column(ColumnId),
}

/// Ephemeral state of an in-progress drag gesture.
///
/// Exists only between drag-start and drag-end and is discarded on drag-end
/// regardless of outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub active_item_id: ItemId,
    pub source_column_id: ColumnId,
}

/// A pointer position in the render layer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned droppable region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Squared distance from a point to the nearest edge; zero inside.
    fn distance_sq(&self, p: Point) -> f32 {
        let dx = (self.x - p.x).max(p.x - (self.x + self.width)).max(0.0);
        let dy = (self.y - p.y).max(p.y - (self.y + self.height)).max(0.0);
        dx * dx + dy * dy
    }
}

/// Registry of droppable regions for one frame.
///
/// The render layer rebuilds this whenever layout changes; the engine only
/// reads it. Ties on distance resolve to the earliest-registered target so
/// hit testing stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct DropMap {
    targets: Vec<(DropTarget, Rect)>,
}

impl DropMap {
    /// Create an empty drop map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a droppable region
    pub fn insert(&mut self, target: DropTarget, rect: Rect) {
        self.targets.push((target, rect));
    }

    /// Number of registered regions
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no regions are registered
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// The droppable target nearest to the pointer, if any are registered.
    pub fn nearest(&self, point: Point) -> Option<DropTarget> {
        let mut best: Option<(&DropTarget, f32)> = None;
        for (target, rect) in &self.targets {
            let d = rect.distance_sq(point);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((target, d)),
            }
        }
        best.map(|(target, _)| target.clone())
    }
}

/// The drag session state machine: idle ↔ dragging.
///
/// Only one session can be active at a time; the input layer enforces a
/// single captured pointer/focus, and a second start simply replaces the
/// session.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Create a controller in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for the item, scanning the state for its column.
    /// Returns false (and stays idle) when no lane tracks the item.
    pub fn start(&mut self, state: &BoardState, item: &ItemId) -> bool {
        match state.column_of(item) {
            Some(column) => {
                tracing::debug!(item = %item, column = %column, "drag started");
                self.session = Some(DragSession {
                    active_item_id: item.clone(),
                    source_column_id: column.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// The active session, if a drag is in flight
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether a drag is in flight
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Hit-test the pointer against the drop map. Pure: dragging mutates
    /// nothing until drag-end.
    pub fn target_at(&self, point: Point, map: &DropMap) -> Option<DropTarget> {
        self.session.as_ref()?;
        map.nearest(point)
    }

    /// Close the session and hand back `(active, over)` for resolution.
    ///
    /// The session is cleared unconditionally. Returns `None` (a silent
    /// no-op) when no drag was in flight, no target resolved, or the item
    /// was dropped onto itself.
    pub fn end(&mut self, over: Option<DropTarget>) -> Option<(ItemId, DropTarget)> {
        let session = self.session.take()?;
        let over = over?;
        if matches!(&over, DropTarget::Item(id) if *id == session.active_item_id) {
            return None;
        }
        Some((session.active_item_id, over))
    }

    /// Release the drag outside any valid target: zero mutation, zero
    /// dispatch.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, Item};

    fn state() -> BoardState {
        let columns = vec![
            Column::new("screen", "Screening"),
            Column::new("interview", "Interview"),
        ];
        let items = vec![
            Item::new("r1", "screen", 1),
            Item::new("r2", "screen", 2),
        ];
        BoardState::build(&columns, &items)
    }

    #[test]
    fn test_rect_contains_and_distance() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(60.0, 35.0)));
        assert!(!rect.contains(Point::new(9.9, 35.0)));

        assert_eq!(rect.distance_sq(Point::new(60.0, 35.0)), 0.0);
        // 5 left of the rect
        assert_eq!(rect.distance_sq(Point::new(5.0, 35.0)), 25.0);
        // 3 left, 4 above
        assert_eq!(rect.distance_sq(Point::new(7.0, 6.0)), 25.0);
    }

    #[test]
    fn test_nearest_prefers_containing_rect() {
        let mut map = DropMap::new();
        map.insert(DropTarget::Item("r1".into()), Rect::new(0.0, 0.0, 100.0, 40.0));
        map.insert(DropTarget::Item("r2".into()), Rect::new(0.0, 50.0, 100.0, 40.0));

        assert_eq!(
            map.nearest(Point::new(50.0, 60.0)),
            Some(DropTarget::Item("r2".into()))
        );
    }

    #[test]
    fn test_nearest_outside_all_rects_picks_closest() {
        let mut map = DropMap::new();
        map.insert(DropTarget::Item("r1".into()), Rect::new(0.0, 0.0, 100.0, 40.0));
        map.insert(
            DropTarget::Column("interview".into()),
            Rect::new(120.0, 0.0, 100.0, 200.0),
        );

        assert_eq!(
            map.nearest(Point::new(115.0, 100.0)),
            Some(DropTarget::Column("interview".into()))
        );
    }

    #[test]
    fn test_nearest_tie_goes_to_earlier_registration() {
        let mut map = DropMap::new();
        map.insert(DropTarget::Item("r1".into()), Rect::new(0.0, 0.0, 10.0, 10.0));
        map.insert(DropTarget::Item("r2".into()), Rect::new(20.0, 0.0, 10.0, 10.0));

        // Exactly halfway between the two rects
        assert_eq!(
            map.nearest(Point::new(15.0, 5.0)),
            Some(DropTarget::Item("r1".into()))
        );
    }

    #[test]
    fn test_nearest_on_empty_map() {
        assert_eq!(DropMap::new().nearest(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_start_records_source_column() {
        let mut controller = DragController::new();
        assert!(controller.start(&state(), &"r1".into()));

        let session = controller.session().unwrap();
        assert_eq!(session.active_item_id.as_str(), "r1");
        assert_eq!(session.source_column_id.as_str(), "screen");
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_start_unknown_item_stays_idle() {
        let mut controller = DragController::new();
        assert!(!controller.start(&state(), &"ghost".into()));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_end_clears_session_unconditionally() {
        let mut controller = DragController::new();

        controller.start(&state(), &"r1".into());
        assert!(controller.end(None).is_none());
        assert!(!controller.is_dragging());

        controller.start(&state(), &"r1".into());
        let resolved = controller.end(Some(DropTarget::Item("r2".into())));
        assert_eq!(
            resolved,
            Some(("r1".into(), DropTarget::Item("r2".into())))
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_end_on_self_is_a_noop() {
        let mut controller = DragController::new();
        controller.start(&state(), &"r1".into());

        assert!(controller.end(Some(DropTarget::Item("r1".into()))).is_none());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_end_without_start_is_a_noop() {
        let mut controller = DragController::new();
        assert!(controller.end(Some(DropTarget::Item("r1".into()))).is_none());
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut controller = DragController::new();
        controller.start(&state(), &"r1".into());
        controller.cancel();
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_target_at_requires_active_session() {
        let mut map = DropMap::new();
        map.insert(DropTarget::Item("r1".into()), Rect::new(0.0, 0.0, 10.0, 10.0));

        let mut controller = DragController::new();
        assert_eq!(controller.target_at(Point::new(5.0, 5.0), &map), None);

        controller.start(&state(), &"r2".into());
        assert_eq!(
            controller.target_at(Point::new(5.0, 5.0), &map),
            Some(DropTarget::Item("r1".into()))
        );
    }
}
