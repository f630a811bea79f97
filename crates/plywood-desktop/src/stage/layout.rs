//! Reflow and cross-axis sizing

use plywood_anim::{Action, Scheduler};
use tracing::{debug, trace, warn};

use crate::math::{Area, Point};
use crate::view::{View, ViewId};

use super::{Stage, StageTarget};

/// Motion below this is treated as settled
const SETTLED: f64 = 0.01;

/// Size a view to the cross-axis fraction of `height` and center it
/// vertically, centering the committed content rather than the requested box
pub(super) fn center_view(view: &mut dyn View, height: i32, factor: f64) {
    if height == 0 {
        return;
    }

    let target_height = (height as f64 * factor) as i32;
    let area = view.area();
    if area.height != target_height {
        view.set_area(Area::new(area.width, target_height));
    }

    let surface_height = view.surface_area().height;
    let compensation = if surface_height > 0 {
        (target_height - surface_height) as f64 / 2.0
    } else {
        0.0
    };
    let y = height as f64 * (1.0 - factor) / 2.0 + compensation;
    let x = view.position().x;
    view.set_position(Point::new(x, y));
}

impl Stage {
    /// Re-fit a view whose committed size differs from what layout asked for
    ///
    /// Clamps the width to the viewport, re-centers the view and slides the
    /// views after it to the new gap. Returns false for a view not on stage.
    pub fn reflow_view(&mut self, id: ViewId, scheduler: &mut Scheduler<StageTarget>) -> bool {
        let Some((row_index, index)) = self.locate(id) else {
            warn!(view = id, "reflow of a view not on stage");
            return false;
        };
        let Some(view) = self.views.get_mut(&id) else {
            return false;
        };

        let padding = self.settings.padding;
        let mut area = view.area();
        if self.viewport.width > 0 {
            let max_width = self.viewport.width - padding as i32;
            if max_width > 0 && area.width > max_width {
                area.width = max_width;
                view.set_area(area);
            }
        }
        center_view(view.as_mut(), self.cross_axis, self.settings.cross_axis_factor);

        let row = &mut self.rows[row_index];
        let Some(next) = row.columns.get(index + 1) else {
            trace!(view = id, "reflowed last view");
            return true;
        };

        let expected = row.columns[index].target_x + area.width as f64 + self.settings.spacing;
        let delta = expected - next.target_x;
        if delta.abs() < SETTLED {
            return true;
        }

        for column in &mut row.columns[index + 1..] {
            column.target_x += delta;
        }
        debug!(view = id, delta, "reflowing after resize");
        self.start_reflow(row_index, scheduler);
        true
    }

    /// React to a change of the combined output resolution
    ///
    /// Returns false when the height is unchanged and nothing was re-laid out.
    pub fn update_output_mode(&mut self, resolution: Area) -> bool {
        self.viewport = resolution;
        if resolution.height == self.cross_axis {
            return false;
        }

        self.cross_axis = resolution.height;
        let factor = self.settings.cross_axis_factor;
        for row in &self.rows {
            for column in &row.columns {
                if let Some(view) = self.views.get_mut(&column.view) {
                    center_view(view.as_mut(), resolution.height, factor);
                }
            }
        }
        debug!(
            width = resolution.width,
            height = resolution.height,
            "cross axis updated"
        );
        true
    }

    /// Animate every view of a row from where it is to its resting x,
    /// replacing the row's running reflow
    pub(super) fn start_reflow(&mut self, row_index: usize, scheduler: &mut Scheduler<StageTarget>) {
        let row = &mut self.rows[row_index];
        if let Some(previous) = row.reflow.take() {
            scheduler.remove(previous);
        }

        let reflow = self.settings.reflow;
        let tweens: Vec<_> = row
            .columns
            .iter()
            .filter_map(|column| {
                let x = self.views.get(&column.view)?.position().x;
                ((x - column.target_x).abs() >= SETTLED).then(|| {
                    Action::tween(
                        StageTarget::ViewX { view: column.view },
                        x,
                        column.target_x,
                        reflow.duration,
                        reflow.easing,
                    )
                })
            })
            .collect();

        if tweens.is_empty() {
            return;
        }
        row.reflow = Some(scheduler.run(Action::group(tweens)));
    }
}
