//! Compositor settings
//!
//! One [`Settings`] value is owned by the [`Compositor`](crate::Compositor);
//! the stage receives a copy of [`StageSettings`] at construction. Settings
//! load from JSON and every field has a default, so a partial file is valid.

use std::fs;
use std::path::Path;

use plywood_anim::Easing;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Duration and curve of one kind of animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Seconds
    pub duration: f64,
    pub easing: Easing,
}

impl AnimationSettings {
    /// Create animation settings
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Layout and motion parameters for the stage
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSettings {
    /// Left inset of the first view, and the scroll rest margin
    pub padding: f64,
    /// Horizontal gap between neighbouring views
    pub spacing: f64,
    /// Fraction of the viewport height given to each view
    pub cross_axis_factor: f64,
    /// Shifting later views after a removal or resize
    pub reflow: AnimationSettings,
    /// Scrolling the row to a new focused column
    pub scroll: AnimationSettings,
    /// Both legs of the boundary bounce together
    pub bounce: AnimationSettings,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            padding: 56.0,
            spacing: 24.0,
            cross_axis_factor: 0.9,
            reflow: AnimationSettings::new(0.3, Easing::EaseOutCubic),
            scroll: AnimationSettings::new(0.25, Easing::EaseOutCubic),
            bounce: AnimationSettings::new(0.2, Easing::EaseInOutCubic),
        }
    }
}

/// Keyboard repeat and navigation bindings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardSettings {
    /// Repeats per second
    pub repeat_rate: i32,
    /// Milliseconds before repeating starts
    pub repeat_delay: i32,
    /// Treat Caps Lock as the logo modifier
    pub caps_lock_as_logo: bool,
    /// Accept logo+A / logo+D alongside the arrow keys
    pub wasd_navigation: bool,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            repeat_rate: 25,
            repeat_delay: 600,
            caps_lock_as_logo: true,
            wasd_navigation: true,
        }
    }
}

/// All compositor settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub stage: StageSettings,
    pub keyboard: KeyboardSettings,
    /// Frame clear colour (RGBA)
    pub background: [f32; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stage: StageSettings::default(),
            keyboard: KeyboardSettings::default(),
            background: [0.3, 0.3, 0.3, 1.0],
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let stage = &self.stage;
        if !(stage.cross_axis_factor > 0.0 && stage.cross_axis_factor <= 1.0) {
            return Err(invalid("stage.cross_axis_factor", "must be in (0, 1]"));
        }
        if !(stage.padding >= 0.0) {
            return Err(invalid("stage.padding", "must be non-negative"));
        }
        if !(stage.spacing >= 0.0) {
            return Err(invalid("stage.spacing", "must be non-negative"));
        }

        let durations = [
            ("stage.reflow.duration", stage.reflow.duration),
            ("stage.scroll.duration", stage.scroll.duration),
            ("stage.bounce.duration", stage.bounce.duration),
        ];
        for (field, duration) in durations {
            if !(duration >= 0.0) {
                return Err(invalid(field, "must be non-negative"));
            }
        }

        if self.keyboard.repeat_rate < 0 || self.keyboard.repeat_delay < 0 {
            return Err(invalid("keyboard", "repeat rate and delay must be non-negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
