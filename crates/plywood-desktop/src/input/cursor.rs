//! Pointer position and gesture state

use tracing::trace;

use crate::math::{Area, Point, Rect};
use crate::view::ViewId;

use super::{CursorMode, Edges};

/// The seat's pointer
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    position: Point,
    mode: CursorMode,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout-space position
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    /// Start an interactive move of a view at `view_position`
    pub fn begin_move(&mut self, view: ViewId, view_position: Point) {
        self.mode = CursorMode::Move {
            view,
            grab: self.position - view_position,
        };
        trace!(view, "move gesture started");
    }

    /// Start an interactive resize from the view's current geometry
    pub fn begin_resize(&mut self, view: ViewId, position: Point, area: Area, edges: Edges) {
        self.mode = CursorMode::Resize {
            view,
            grab: self.position,
            start_position: position,
            start_area: area,
            edges,
        };
        trace!(view, ?edges, "resize gesture started");
    }

    /// Return to passthrough
    pub fn end_gesture(&mut self) {
        if !self.mode.is_passthrough() {
            trace!(view = ?self.mode.view(), "gesture ended");
        }
        self.mode = CursorMode::Passthrough;
    }

    /// Move by a relative delta, staying inside `extents` when known
    pub fn move_by(&mut self, delta: Point, extents: Option<Rect>) -> Point {
        let position = self.position + delta;
        self.position = match extents {
            Some(extents) => extents.clamp(position),
            None => position,
        };
        self.position
    }

    /// Jump to a point given in 0..1 coordinates of `extents`
    pub fn warp_normalized(&mut self, normalized: Point, extents: Rect) -> Point {
        let position = Point::new(
            extents.x + normalized.x * extents.width,
            extents.y + normalized.y * extents.height,
        );
        self.position = extents.clamp(position);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_by_clamps_to_extents() {
        let mut cursor = Cursor::new();
        let extents = Rect::new(0.0, 0.0, 800.0, 600.0);

        cursor.move_by(Point::new(100.0, 50.0), Some(extents));
        assert_eq!(cursor.position(), Point::new(100.0, 50.0));

        cursor.move_by(Point::new(-500.0, 900.0), Some(extents));
        assert_eq!(cursor.position(), Point::new(0.0, 599.0));
    }

    #[test]
    fn test_move_by_without_outputs() {
        let mut cursor = Cursor::new();
        cursor.move_by(Point::new(-5.0, -5.0), None);
        assert_eq!(cursor.position(), Point::new(-5.0, -5.0));
    }

    #[test]
    fn test_warp_normalized() {
        let mut cursor = Cursor::new();
        let extents = Rect::new(0.0, 0.0, 1000.0, 500.0);
        cursor.warp_normalized(Point::new(0.5, 0.25), extents);
        assert_eq!(cursor.position(), Point::new(500.0, 125.0));
    }

    #[test]
    fn test_begin_move_records_grab_offset() {
        let mut cursor = Cursor::new();
        cursor.move_by(Point::new(150.0, 80.0), None);
        cursor.begin_move(3, Point::new(100.0, 50.0));

        match cursor.mode() {
            CursorMode::Move { view, grab } => {
                assert_eq!(view, 3);
                assert_eq!(grab, Point::new(50.0, 30.0));
            }
            other => panic!("expected move, got {other:?}"),
        }

        cursor.end_gesture();
        assert!(cursor.mode().is_passthrough());
    }

    #[test]
    fn test_begin_resize_records_start_geometry() {
        let mut cursor = Cursor::new();
        cursor.move_by(Point::new(500.0, 400.0), None);
        cursor.begin_resize(7, Point::new(56.0, 30.0), Area::new(400, 540), Edges::RIGHT);

        match cursor.mode() {
            CursorMode::Resize {
                view,
                grab,
                start_area,
                edges,
                ..
            } => {
                assert_eq!(view, 7);
                assert_eq!(grab, Point::new(500.0, 400.0));
                assert_eq!(start_area, Area::new(400, 540));
                assert_eq!(edges, Edges::RIGHT);
            }
            other => panic!("expected resize, got {other:?}"),
        }
    }
}
