//! Pointer routing and interactive gestures

use tracing::{debug, trace};

use crate::input::{calculate_resize, CursorMode, Edges, InputResult};
use crate::math::{Area, Point};
use crate::seat::{AxisEvent, ButtonState, Seat};
use crate::view::ViewId;

use super::Compositor;

impl<S: Seat> Compositor<S> {
    /// Relative pointer motion
    pub fn handle_pointer_motion(&mut self, time_ms: u32, delta: Point) -> InputResult {
        let extents = self.outputs.extents();
        self.cursor.move_by(delta, extents);
        self.process_motion(time_ms)
    }

    /// Absolute pointer motion in 0..1 coordinates of the output layout
    pub fn handle_pointer_motion_absolute(&mut self, time_ms: u32, normalized: Point) -> InputResult {
        let Some(extents) = self.outputs.extents() else {
            return InputResult::Unhandled;
        };
        self.cursor.warp_normalized(normalized, extents);
        self.process_motion(time_ms)
    }

    pub fn handle_pointer_button(
        &mut self,
        time_ms: u32,
        button: u32,
        state: ButtonState,
    ) -> InputResult {
        self.seat.notify_pointer_button(time_ms, button, state);

        if state == ButtonState::Released {
            self.cursor.end_gesture();
            return InputResult::Handled;
        }

        if !self.cursor.mode().is_passthrough() {
            return InputResult::Handled;
        }

        match self.stage.find_view(self.cursor.position()) {
            Some(hit) => {
                self.focus_view(hit.view);
                InputResult::Forward {
                    view: hit.view,
                    surface: hit.surface,
                    local_x: hit.local.x,
                    local_y: hit.local.y,
                }
            }
            None => InputResult::Unhandled,
        }
    }

    pub fn handle_pointer_axis(&mut self, event: AxisEvent) {
        self.seat.notify_pointer_axis(event);
    }

    pub fn handle_pointer_frame(&mut self) {
        self.seat.notify_pointer_frame();
    }

    /// Client asked for an interactive move
    ///
    /// Ignored unless the view holds keyboard focus.
    pub fn handle_move_request(&mut self, id: ViewId) -> bool {
        let Some(position) = self.focused_view_geometry(id).map(|(p, _)| p) else {
            return false;
        };
        self.cursor.begin_move(id, position);
        true
    }

    /// Client asked for an interactive resize on `edges`
    ///
    /// Ignored unless the view holds keyboard focus.
    pub fn handle_resize_request(&mut self, id: ViewId, edges: Edges) -> bool {
        let Some((position, area)) = self.focused_view_geometry(id) else {
            return false;
        };
        self.cursor.begin_resize(id, position, area, edges);
        true
    }

    fn focused_view_geometry(&self, id: ViewId) -> Option<(Point, Area)> {
        let view = self.stage.view(id)?;
        if self.seat.keyboard_focus() != Some(view.surface()) {
            debug!(view = id, "gesture request from an unfocused view");
            return None;
        }
        Some((view.position(), view.area()))
    }

    fn process_motion(&mut self, time_ms: u32) -> InputResult {
        match self.cursor.mode() {
            CursorMode::Passthrough => self.passthrough_motion(time_ms),
            CursorMode::Move { view, .. } => {
                trace!(view, "interactive move is disabled");
                InputResult::Handled
            }
            CursorMode::Resize {
                view,
                grab,
                start_position,
                start_area,
                edges,
            } => {
                let delta = self.cursor.position() - grab;
                let (position, area) = calculate_resize(edges, start_position, start_area, delta);
                let Some(target) = self.stage.view_mut(view) else {
                    self.cursor.end_gesture();
                    return InputResult::Unhandled;
                };
                target.set_position(position);
                target.set_area(area);
                InputResult::Handled
            }
        }
    }

    fn passthrough_motion(&mut self, time_ms: u32) -> InputResult {
        let Some(hit) = self.stage.find_view(self.cursor.position()) else {
            self.seat.set_default_cursor();
            self.seat.clear_pointer_focus();
            return InputResult::Unhandled;
        };

        let entered = self.seat.pointer_focus() != Some(hit.surface);
        self.seat.notify_pointer_enter(hit.surface, hit.local);
        if !entered {
            self.seat.notify_pointer_motion(time_ms, hit.local);
        }

        InputResult::Forward {
            view: hit.view,
            surface: hit.surface,
            local_x: hit.local.x,
            local_y: hit.local.y,
        }
    }
}
