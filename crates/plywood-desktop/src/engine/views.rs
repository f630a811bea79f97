//! View lifecycle and focus

use tracing::{debug, info, warn};

use crate::seat::Seat;
use crate::view::{View, ViewId};

use super::Compositor;

impl<S: Seat> Compositor<S> {
    /// Register a new toplevel; it stays pending until mapped
    pub fn handle_new_toplevel(&mut self, view: Box<dyn View>) -> ViewId {
        let id = self.next_view_id;
        self.next_view_id += 1;
        debug!(view = id, surface = %view.surface(), "new toplevel");
        self.pending.insert(id, view);
        id
    }

    /// Move a pending view onto the stage and focus it
    pub fn handle_map(&mut self, id: ViewId) -> bool {
        let Some(mut view) = self.pending.remove(&id) else {
            warn!(view = id, "map of an unknown or already mapped view");
            return false;
        };
        view.commit();
        self.stage.insert(id, view);

        let drifted = self.stage.view_mut(id).is_some_and(|v| v.commit());
        if drifted {
            self.stage.reflow_view(id, &mut self.scheduler);
        }

        info!(view = id, "mapped");
        self.focus_view(id);
        true
    }

    /// Client committed new state; reflow when its geometry drifted
    pub fn handle_commit(&mut self, id: ViewId) -> bool {
        if let Some(view) = self.pending.get_mut(&id) {
            view.commit();
            return false;
        }

        let drifted = self.stage.view_mut(id).is_some_and(|v| v.commit());
        if drifted {
            self.stage.reflow_view(id, &mut self.scheduler)
        } else {
            false
        }
    }

    /// Take a view off the stage; it returns to the pending set
    pub fn handle_unmap(&mut self, id: ViewId) -> bool {
        let Some(surface) = self.stage.view(id).map(|v| v.surface()) else {
            warn!(view = id, "unmap of a view not on stage");
            return false;
        };
        let had_focus = self.seat.keyboard_focus() == Some(surface);

        if self.cursor.mode().view() == Some(id) {
            self.cursor.end_gesture();
        }

        let Some(mut view) = self.stage.remove(id, &mut self.scheduler) else {
            return false;
        };
        view.set_activated(false);
        self.pending.insert(id, view);
        info!(view = id, "unmapped");

        if had_focus {
            if let Some(next) = self.stage.focused_view() {
                self.focus_view(next);
            }
        }
        true
    }

    /// Forget a view entirely
    pub fn handle_destroy(&mut self, id: ViewId) -> bool {
        if self.stage.contains(id) {
            self.handle_unmap(id);
        }
        if self.pending.remove(&id).is_some() {
            debug!(view = id, "destroyed");
            true
        } else {
            warn!(view = id, "destroy of an untracked view");
            false
        }
    }

    /// Give a mapped view keyboard focus
    ///
    /// The single path that keeps keyboard focus, the activated state and the
    /// stage scroll consistent. Returns false when nothing changed.
    pub fn focus_view(&mut self, id: ViewId) -> bool {
        let Some(surface) = self.stage.view(id).map(|v| v.surface()) else {
            warn!(view = id, "focus of a view not on stage");
            return false;
        };

        let previous = self.seat.keyboard_focus();
        if previous == Some(surface) {
            return false;
        }

        if let Some(previous) = previous {
            let previous_view = self.stage.view_by_surface(previous).or_else(|| {
                self.pending
                    .iter()
                    .find(|(_, v)| v.surface() == previous)
                    .map(|(id, _)| *id)
            });
            if let Some(previous_view) = previous_view {
                self.set_activated(previous_view, false);
            }
        }

        self.set_activated(id, true);
        self.seat.notify_keyboard_enter(surface);
        self.stage.focus_view(id, &mut self.scheduler);
        debug!(view = id, "focused");
        true
    }

    fn set_activated(&mut self, id: ViewId, activated: bool) {
        if let Some(view) = self.stage.view_mut(id) {
            view.set_activated(activated);
        } else if let Some(view) = self.pending.get_mut(&id) {
            view.set_activated(activated);
        }
    }
}
