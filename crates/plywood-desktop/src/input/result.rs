//! Input result type

use serde::Serialize;

use crate::view::{SurfaceId, ViewId};

/// Outcome of routing one input event
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Consumed by the compositor
    Handled,
    /// Nothing took the event
    Unhandled,
    /// Delivered to a client surface
    Forward {
        view: ViewId,
        surface: SurfaceId,
        local_x: f64,
        local_y: f64,
    },
}

impl InputResult {
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }

    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}
