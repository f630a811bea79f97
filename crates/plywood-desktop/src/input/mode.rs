//! Pointer interaction mode

use serde::Serialize;

use crate::math::{Area, Point};
use crate::view::ViewId;

use super::Edges;

/// What pointer motion currently does
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CursorMode {
    /// Motion is hit-tested and forwarded to clients
    #[default]
    Passthrough,
    /// Interactive move
    Move {
        view: ViewId,
        /// Offset from the view origin to the pointer
        grab: Point,
    },
    /// Interactive resize
    Resize {
        view: ViewId,
        /// Pointer position when the gesture began
        grab: Point,
        start_position: Point,
        start_area: Area,
        edges: Edges,
    },
}

impl CursorMode {
    #[inline]
    pub fn is_passthrough(&self) -> bool {
        matches!(self, CursorMode::Passthrough)
    }

    /// View being manipulated, if any
    pub fn view(&self) -> Option<ViewId> {
        match self {
            CursorMode::Passthrough => None,
            CursorMode::Move { view, .. } | CursorMode::Resize { view, .. } => Some(*view),
        }
    }
}
