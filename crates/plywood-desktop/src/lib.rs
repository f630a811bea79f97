//! Plywood compositor core
//!
//! Layout, animation and input routing for a scrolling tiling compositor.
//! Protocol objects, GPU rendering and key translation live outside this
//! crate and plug in through traits:
//!
//! - [`Toplevel`] wraps a protocol window; [`XdgView`] adapts it to [`View`]
//! - [`Seat`] delivers focus and input events to clients
//! - [`Renderer`] draws surface textures for one output frame
//!
//! [`Compositor`] owns the rest: the [`Stage`] layout, the animation
//! [`Scheduler`](plywood_anim::Scheduler), the [`Cursor`], the
//! [`OutputLayout`] and the [`Settings`]. The [`headless`] module provides
//! in-memory collaborators.

pub mod engine;
pub mod error;
pub mod headless;
pub mod input;
pub mod math;
pub mod output;
pub mod seat;
pub mod settings;
pub mod stage;
pub mod view;

pub use engine::Compositor;
pub use error::{ConfigError, RenderError};
pub use input::{Cursor, CursorMode, Edges, InputResult, KeyEvent, Keysym};
pub use math::{Area, Point, Rect};
pub use output::{OutputInfo, OutputLayout, RenderBox, Renderer};
pub use seat::{AxisEvent, ButtonState, KeyState, Modifiers, Seat};
pub use settings::{AnimationSettings, KeyboardSettings, Settings, StageSettings};
pub use stage::{ColumnOffset, Stage, StageSnapshot, StageTarget, ViewHit};
pub use view::{SubSurface, SurfaceHit, SurfaceId, Toplevel, View, ViewId, XdgView};

pub use plywood_anim;
