//! Keyboard bindings and forwarding

use tracing::debug;

use crate::input::{navigation_for, InputResult, KeyEvent, Navigation};
use crate::seat::{Modifiers, Seat};

use super::Compositor;

impl<S: Seat> Compositor<S> {
    /// Apply the configured repeat rate to a new keyboard
    pub fn handle_new_keyboard(&mut self) {
        let keyboard = self.settings.keyboard;
        self.seat
            .configure_keyboard(keyboard.repeat_rate, keyboard.repeat_delay);
    }

    pub fn handle_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
        self.seat.notify_modifiers(modifiers);
    }

    /// Run a navigation binding, or forward the key to the focused client
    ///
    /// Forwarded keys report [`InputResult::Unhandled`].
    pub fn handle_key(&mut self, event: KeyEvent) -> InputResult {
        let Some(navigation) = navigation_for(&event, self.modifiers, &self.settings.keyboard)
        else {
            self.seat.notify_key(event.time_ms, event.keycode, event.state);
            return InputResult::Unhandled;
        };

        debug!(?navigation, "navigation binding");
        let target = match navigation {
            Navigation::Left => self.stage.move_left(1, &mut self.scheduler),
            Navigation::Right => self.stage.move_right(1, &mut self.scheduler),
        };
        if let Some(view) = target {
            self.focus_view(view);
        }
        InputResult::Handled
    }
}
