//! Protocol toplevel collaborator

use crate::math::{Area, Point};

use super::{SubSurface, SurfaceHit, SurfaceId};

/// One toplevel object of the surface protocol
///
/// Implemented by the protocol layer; [`XdgView`](super::XdgView) adapts it
/// to the [`View`](super::View) contract.
pub trait Toplevel {
    fn surface(&self) -> SurfaceId;

    /// Window geometry the client last committed
    fn geometry(&self) -> Area;

    /// Extent of the committed root buffer
    fn surface_area(&self) -> Area;

    /// Send a configure asking the client for a new size
    fn set_size(&mut self, area: Area);

    fn set_activated(&mut self, activated: bool);

    fn for_each_sub_surface(&self, f: &mut dyn FnMut(&SubSurface));

    /// Hit-test a point relative to the toplevel's origin
    fn surface_at(&self, local: Point) -> Option<SurfaceHit>;

    /// Tell the client a frame using its buffer was presented
    fn send_frame_done(&self, surface: SurfaceId);
}
