//! Seat collaborator: input focus and event delivery to clients

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::math::Point;
use crate::view::SurfaceId;

bitflags! {
    /// Keyboard modifier state, in xkb bit order
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u32 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const CAPS  = 1 << 1;
        const CTRL  = 1 << 2;
        const ALT   = 1 << 3;
        const MOD2  = 1 << 4;
        const MOD3  = 1 << 5;
        /// Super / Windows key
        const LOGO  = 1 << 6;
        const MOD5  = 1 << 7;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrientation {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSource {
    Wheel,
    Finger,
    Continuous,
    WheelTilt,
}

/// Scroll event as delivered by the pointer device
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisEvent {
    pub time_ms: u32,
    pub orientation: AxisOrientation,
    pub source: AxisSource,
    pub delta: f64,
    pub delta_discrete: i32,
}

/// Input routing to client surfaces
///
/// Implemented by the protocol layer. The compositor decides *which* surface
/// receives events; the seat delivers them.
pub trait Seat {
    /// Surface currently holding keyboard focus
    fn keyboard_focus(&self) -> Option<SurfaceId>;

    /// Surface currently holding pointer focus
    fn pointer_focus(&self) -> Option<SurfaceId>;

    /// Give pointer focus to `surface` at `local` surface coordinates
    fn notify_pointer_enter(&mut self, surface: SurfaceId, local: Point);

    fn notify_pointer_motion(&mut self, time_ms: u32, local: Point);

    fn notify_pointer_button(&mut self, time_ms: u32, button: u32, state: ButtonState);

    fn notify_pointer_axis(&mut self, event: AxisEvent);

    fn notify_pointer_frame(&mut self);

    fn clear_pointer_focus(&mut self);

    fn notify_keyboard_enter(&mut self, surface: SurfaceId);

    fn notify_key(&mut self, time_ms: u32, keycode: u32, state: KeyState);

    fn notify_modifiers(&mut self, modifiers: Modifiers);

    /// Reset the pointer image to the default arrow
    fn set_default_cursor(&mut self);

    fn configure_keyboard(&mut self, repeat_rate: i32, repeat_delay: i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_bits_match_xkb() {
        assert_eq!(Modifiers::SHIFT.bits(), 1);
        assert_eq!(Modifiers::CAPS.bits(), 2);
        assert_eq!(Modifiers::LOGO.bits(), 64);
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn test_modifiers_combine() {
        let mods = Modifiers::from_bits_truncate(64 | 1);
        assert!(mods.contains(Modifiers::LOGO));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::CTRL));
    }
}
