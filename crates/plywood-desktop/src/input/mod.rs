//! Pointer and keyboard input
//!
//! - [`Cursor`] tracks the pointer position and its [`CursorMode`]
//! - [`calculate_resize`] turns a pointer delta into new view geometry
//! - [`navigation_for`] maps key presses to column navigation

mod cursor;
mod keys;
mod mode;
mod result;

pub use cursor::Cursor;
pub use keys::{navigation_for, KeyEvent, Keysym, Navigation};
pub use mode::CursorMode;
pub use result::InputResult;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::math::{Area, Point};

bitflags! {
    /// Window edges grabbed by an interactive resize
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Edges: u32 {
        const NONE   = 0;
        const TOP    = 1;
        const BOTTOM = 2;
        const LEFT   = 4;
        const RIGHT  = 8;
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::NONE
    }
}

/// New position and size for a resize gesture
///
/// `delta` is the pointer travel since the gesture began. Dimensions never
/// drop below 1; when a top or left drag hits that floor the position stops
/// at the far edge so the opposite side stays put.
pub fn calculate_resize(
    edges: Edges,
    start_position: Point,
    start_area: Area,
    delta: Point,
) -> (Point, Area) {
    let mut position = start_position;
    let mut area = start_area;

    if edges.contains(Edges::TOP) {
        let height = (start_area.height as f64 - delta.y) as i32;
        if height < 1 {
            area.height = 1;
            position.y = start_position.y + (start_area.height - 1) as f64;
        } else {
            area.height = height;
            position.y = start_position.y + delta.y;
        }
    } else if edges.contains(Edges::BOTTOM) {
        area.height = ((start_area.height as f64 + delta.y) as i32).max(1);
    }

    if edges.contains(Edges::LEFT) {
        let width = (start_area.width as f64 - delta.x) as i32;
        if width < 1 {
            area.width = 1;
            position.x = start_position.x + (start_area.width - 1) as f64;
        } else {
            area.width = width;
            position.x = start_position.x + delta.x;
        }
    } else if edges.contains(Edges::RIGHT) {
        area.width = ((start_area.width as f64 + delta.x) as i32).max(1);
    }

    (position, area)
}
