//! Keyboard navigation bindings

use serde::{Deserialize, Serialize};

use crate::seat::{KeyState, Modifiers};
use crate::settings::KeyboardSettings;

/// Translated key symbol
///
/// Symbol translation belongs to the protocol layer; only the symbols the
/// compositor binds are named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keysym {
    Left,
    Right,
    Up,
    Down,
    Char(char),
    Other(u32),
}

/// One key press or release
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub time_ms: u32,
    /// Raw evdev keycode, forwarded to clients untranslated
    pub keycode: u32,
    pub keysym: Keysym,
    pub state: KeyState,
}

/// Column navigation direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    Left,
    Right,
}

/// Navigation bound to a key press, if any
pub fn navigation_for(
    event: &KeyEvent,
    modifiers: Modifiers,
    settings: &KeyboardSettings,
) -> Option<Navigation> {
    if event.state != KeyState::Pressed {
        return None;
    }

    let logo = modifiers.contains(Modifiers::LOGO)
        || (settings.caps_lock_as_logo && modifiers.contains(Modifiers::CAPS));
    if !logo {
        return None;
    }

    match event.keysym {
        Keysym::Left => Some(Navigation::Left),
        Keysym::Right => Some(Navigation::Right),
        Keysym::Char('a' | 'A') if settings.wasd_navigation => Some(Navigation::Left),
        Keysym::Char('d' | 'D') if settings.wasd_navigation => Some(Navigation::Right),
        _ => None,
    }
}
