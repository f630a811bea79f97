//! Easing curves for interpolations

use serde::{Deserialize, Serialize};

/// Named easing curve applied to normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing
    Linear,
    /// Cubic deceleration to zero velocity
    #[default]
    EaseOutCubic,
    /// Cubic acceleration until halfway, then deceleration
    EaseInOutCubic,
}

impl Easing {
    /// Map progress `t` in `[0, 1]` through the curve.
    ///
    /// Input is clamped, and both endpoints map exactly onto 0 and 1.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => linear(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::EaseInOutCubic => ease_in_out(t),
        }
    }
}

/// Ease-in-out cubic function
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation (no easing)
#[inline]
pub fn linear(t: f64) -> f64 {
    t
}
