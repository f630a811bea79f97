//! Compositor core coordinating all components
//!
//! This module is split into focused submodules:
//! - `views`: toplevel lifecycle and the focus path
//! - `input`: pointer routing and interactive gestures
//! - `keyboard`: key bindings and forwarding
//! - `outputs`: display hot-plug and mode changes
//! - `frame`: per-output tick and render

mod frame;
mod input;
mod keyboard;
mod outputs;
mod views;

use std::collections::HashMap;

use plywood_anim::Scheduler;

use crate::input::Cursor;
use crate::output::OutputLayout;
use crate::seat::{Modifiers, Seat};
use crate::settings::Settings;
use crate::stage::{Stage, StageTarget};
use crate::view::{View, ViewId};

/// Compositor state driven by protocol events
///
/// Owns every piece of mutable state the event handlers touch:
/// - Settings (replacing any global configuration)
/// - Stage (mapped views and layout)
/// - Scheduler (stage animations, ticked per output frame)
/// - Cursor (pointer position and gesture mode)
/// - Output layout
/// - Seat (delivery to clients)
pub struct Compositor<S: Seat> {
    pub settings: Settings,
    pub stage: Stage,
    pub scheduler: Scheduler<StageTarget>,
    pub cursor: Cursor,
    pub outputs: OutputLayout,
    pub seat: S,
    /// Toplevels created but not mapped
    pub(crate) pending: HashMap<ViewId, Box<dyn View>>,
    pub(crate) next_view_id: ViewId,
    pub(crate) modifiers: Modifiers,
}

impl<S: Seat> Compositor<S> {
    /// Create a compositor with a running animation scheduler
    pub fn new(settings: Settings, seat: S) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.start();

        Self {
            stage: Stage::new(settings.stage),
            settings,
            scheduler,
            cursor: Cursor::new(),
            outputs: OutputLayout::new(),
            seat,
            pending: HashMap::new(),
            next_view_id: 1,
            modifiers: Modifiers::NONE,
        }
    }

    /// A view, mapped or pending
    pub fn view(&self, id: ViewId) -> Option<&dyn View> {
        self.stage
            .view(id)
            .or_else(|| self.pending.get(&id).map(|v| v.as_ref() as &dyn View))
    }

    pub fn is_pending(&self, id: ViewId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Number of views awaiting their first map
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Last modifier state reported by the keyboard
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Mapped view holding keyboard focus
    pub fn focused_view(&self) -> Option<ViewId> {
        self.stage.view_by_surface(self.seat.keyboard_focus()?)
    }
}
