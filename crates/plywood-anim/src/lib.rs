//! Plywood animation scheduler
//!
//! A generic tweening engine stepped once per output frame:
//!
//! - [`Easing`]: named curves mapping progress onto `[0, 1]`
//! - [`Tween`] and [`Action`]: single interpolations, parallel groups and
//!   sequences over real-valued parameters
//! - [`Scheduler`]: owns live actions, advances them, and reports
//!   [`Update`] messages for the owner to apply
//!
//! The engine has no knowledge of what it animates. Each tween names its
//! parameter with a caller-chosen key `K`.

mod action;
mod easing;
mod scheduler;

pub use action::{Action, Tween, Update};
pub use easing::{ease_in_out, ease_out_cubic, linear, Easing};
pub use scheduler::{ActionId, Scheduler};
