//! Drawing and hit-testing through the row's scroll offset

use tracing::trace;

use crate::math::Point;
use crate::output::{OutputInfo, Renderer};
use crate::view::{SurfaceId, ViewId};

use super::Stage;

/// A view and surface under a point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewHit {
    pub view: ViewId,
    pub surface: SurfaceId,
    /// Point in the surface's local coordinates
    pub local: Point,
}

impl Stage {
    /// Draw the focused row onto one output
    ///
    /// Sub-surfaces starting right of the viewport are skipped.
    pub fn render(&self, output: &OutputInfo, renderer: &mut dyn Renderer) {
        let row = self.focused();
        if row.columns.is_empty() {
            return;
        }

        let scroll = row.offset.scroll_x;
        let limit = self.viewport.width as f64;
        for column in &row.columns {
            let Some(view) = self.views.get(&column.view) else {
                continue;
            };
            let position = view.position();
            view.for_each_sub_surface(&mut |sub| {
                let visual = Point::new(
                    position.x + sub.offset.x - scroll,
                    position.y + sub.offset.y,
                );
                if visual.x > limit {
                    trace!(surface = %sub.surface, x = visual.x, "culled");
                    return;
                }
                view.render(&mut *renderer, sub, visual, output);
            });
        }
    }

    /// Hit-test a point in screen space
    ///
    /// The first view in row order containing the point wins.
    pub fn find_view(&self, point: Point) -> Option<ViewHit> {
        let row = self.focused();
        let stage_point = point.offset_x(row.offset.scroll_x);

        row.columns.iter().find_map(|column| {
            let view = self.views.get(&column.view)?;
            let hit = view.find_surface_at(stage_point)?;
            Some(ViewHit {
                view: column.view,
                surface: hit.surface,
                local: hit.local,
            })
        })
    }
}
