//! Native view backed by an xdg toplevel

use tracing::trace;

use crate::math::{Area, Point};
use crate::output::{OutputInfo, RenderBox, Renderer};

use super::{SubSurface, SurfaceHit, SurfaceId, Toplevel, View};

/// [`View`] over a protocol [`Toplevel`]
#[derive(Debug)]
pub struct XdgView<T: Toplevel> {
    toplevel: T,
    position: Point,
    /// Geometry as last seen on commit
    cached_area: Area,
}

impl<T: Toplevel> XdgView<T> {
    /// Wrap a toplevel; the view starts at the origin
    pub fn new(toplevel: T) -> Self {
        let cached_area = toplevel.geometry();
        Self {
            toplevel,
            position: Point::ZERO,
            cached_area,
        }
    }

    /// Underlying protocol object
    pub fn toplevel(&self) -> &T {
        &self.toplevel
    }
}

impl<T: Toplevel> View for XdgView<T> {
    fn surface(&self) -> SurfaceId {
        self.toplevel.surface()
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn area(&self) -> Area {
        self.toplevel.geometry()
    }

    fn set_area(&mut self, area: Area) {
        self.toplevel.set_size(area);
    }

    fn surface_area(&self) -> Area {
        self.toplevel.surface_area()
    }

    fn commit(&mut self) -> bool {
        let geometry = self.toplevel.geometry();
        if geometry == self.cached_area {
            return false;
        }
        trace!(
            surface = %self.surface(),
            from = ?self.cached_area,
            to = ?geometry,
            "toplevel geometry changed"
        );
        self.cached_area = geometry;
        true
    }

    fn for_each_sub_surface(&self, f: &mut dyn FnMut(&SubSurface)) {
        self.toplevel.for_each_sub_surface(f);
    }

    fn find_surface_at(&self, point: Point) -> Option<SurfaceHit> {
        self.toplevel.surface_at(point - self.position)
    }

    fn set_activated(&mut self, activated: bool) {
        self.toplevel.set_activated(activated);
    }

    fn render(
        &self,
        renderer: &mut dyn Renderer,
        sub: &SubSurface,
        visual: Point,
        output: &OutputInfo,
    ) {
        let local = visual - output.origin;
        let scale = output.scale;
        let size = sub.area.scale(scale);
        let render_box = RenderBox {
            x: (local.x * scale) as i32,
            y: (local.y * scale) as i32,
            width: size.width,
            height: size.height,
        };

        if renderer.render_surface(sub.surface, render_box) {
            self.toplevel.send_frame_done(sub.surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessToplevel, RecordingRenderer};

    #[test]
    fn test_commit_reports_geometry_drift_once() {
        let toplevel = HeadlessToplevel::new(SurfaceId(1), Area::new(200, 100));
        let mut view = XdgView::new(toplevel.clone());
        assert!(!view.commit());

        toplevel.resize_client(Area::new(180, 100));
        assert!(view.commit());
        assert!(!view.commit());
    }

    #[test]
    fn test_find_surface_at_translates_by_position() {
        let toplevel = HeadlessToplevel::new(SurfaceId(3), Area::new(100, 50));
        let mut view = XdgView::new(toplevel);
        view.set_position(Point::new(56.0, 10.0));

        let hit = view.find_surface_at(Point::new(60.0, 20.0)).unwrap();
        assert_eq!(hit.surface, SurfaceId(3));
        assert!((hit.local.x - 4.0).abs() < 0.001);
        assert!((hit.local.y - 10.0).abs() < 0.001);

        assert!(view.find_surface_at(Point::new(10.0, 20.0)).is_none());
    }

    #[test]
    fn test_render_scales_into_output_space() {
        let toplevel = HeadlessToplevel::new(SurfaceId(7), Area::new(100, 50));
        let view = XdgView::new(toplevel.clone());
        let output = OutputInfo::new("HDMI-A-1", Area::new(1920, 1080)).with_scale(2.0);
        let sub = SubSurface {
            surface: SurfaceId(7),
            offset: Point::ZERO,
            area: Area::new(100, 50),
        };

        let mut renderer = RecordingRenderer::new();
        view.render(&mut renderer, &sub, Point::new(10.0, 5.0), &output);

        assert_eq!(renderer.draws.len(), 1);
        let (surface, render_box) = renderer.draws[0];
        assert_eq!(surface, SurfaceId(7));
        assert_eq!(render_box, RenderBox { x: 20, y: 10, width: 200, height: 100 });
        assert_eq!(toplevel.state().frames_done, 1);
    }

    #[test]
    fn test_render_without_texture_skips_frame_done() {
        let toplevel = HeadlessToplevel::new(SurfaceId(7), Area::new(100, 50));
        let view = XdgView::new(toplevel.clone());
        let output = OutputInfo::new("DP-1", Area::new(800, 600));
        let sub = SubSurface {
            surface: SurfaceId(7),
            offset: Point::ZERO,
            area: Area::new(100, 50),
        };

        let mut renderer = RecordingRenderer::new();
        renderer.missing.insert(SurfaceId(7));
        view.render(&mut renderer, &sub, Point::ZERO, &output);

        assert!(renderer.draws.is_empty());
        assert_eq!(toplevel.state().frames_done, 0);
    }
}
