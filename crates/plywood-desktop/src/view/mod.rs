//! Views: the stage's handle on a toplevel window
//!
//! A [`View`] is one managed window's surface tree plus its stage position.
//! The stage and cursor only talk to views through this trait; protocol
//! families supply their own implementation ([`XdgView`] for xdg toplevels).

mod toplevel;
mod xdg;

pub use toplevel::Toplevel;
pub use xdg::XdgView;

use serde::{Deserialize, Serialize};

use crate::math::{Area, Point};
use crate::output::{OutputInfo, Renderer};

/// Unique view identifier
pub type ViewId = u64;

/// Protocol surface identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// One surface in a view's tree, relative to the view's origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubSurface {
    pub surface: SurfaceId,
    /// Offset from the view's top-left corner
    pub offset: Point,
    /// Committed buffer extent
    pub area: Area,
}

/// Result of hit-testing a surface tree
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    pub surface: SurfaceId,
    /// Point in the hit surface's local coordinates
    pub local: Point,
}

/// Capability set the stage and cursor need from a window
///
/// Keyboard focus is not a view method. [`Compositor::focus_view`](crate::Compositor::focus_view)
/// is the one path that activates a view, sends keyboard enter and scrolls
/// the stage to it.
pub trait View {
    /// Root surface of the view
    fn surface(&self) -> SurfaceId;

    /// Top-left corner in stage space
    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    /// Requested size
    fn area(&self) -> Area;

    /// Request a new size from the client
    fn set_area(&mut self, area: Area);

    /// Size the client actually committed
    fn surface_area(&self) -> Area;

    /// Process a client commit; true when the client's geometry no longer
    /// matches what was last observed, meaning the layout needs a reflow
    fn commit(&mut self) -> bool;

    /// Visit every surface of the tree, root first
    fn for_each_sub_surface(&self, f: &mut dyn FnMut(&SubSurface));

    /// Hit-test a stage-space point against the surface tree
    fn find_surface_at(&self, point: Point) -> Option<SurfaceHit>;

    /// Toggle the "activated" decoration state
    fn set_activated(&mut self, activated: bool);

    /// Draw one sub-surface whose top-left lands at `visual` in layout space
    fn render(
        &self,
        renderer: &mut dyn Renderer,
        sub: &SubSurface,
        visual: Point,
        output: &OutputInfo,
    );
}
