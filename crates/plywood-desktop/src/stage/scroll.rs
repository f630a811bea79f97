//! Column navigation and viewport scrolling

use plywood_anim::{Action, Scheduler};
use tracing::{debug, trace, warn};

use crate::view::ViewId;

use super::{Stage, StageTarget};

impl Stage {
    /// Bring a newly focused view fully into the viewport
    ///
    /// A view that is already visible only becomes the focused column. One
    /// that is not scrolls the row by the column distance to it. Returns
    /// false for a view not on stage.
    pub fn focus_view(&mut self, id: ViewId, scheduler: &mut Scheduler<StageTarget>) -> bool {
        let Some((row_index, index)) = self.locate(id) else {
            warn!(view = id, "focus of a view not on stage");
            return false;
        };
        if row_index != self.focused_row {
            trace!(view = id, row = row_index, "focus outside the focused row");
            return true;
        }

        if self.is_visible(row_index, index) {
            self.rows[row_index].offset.index = index;
            return true;
        }

        let current = self.rows[row_index].offset.index;
        let delta = index as isize - current as isize;
        debug!(view = id, from = current, to = index, "scrolling focused view into view");
        if delta >= 0 {
            self.move_right(delta as usize, scheduler);
        } else {
            self.move_left(delta.unsigned_abs(), scheduler);
        }
        true
    }

    /// Move focus `amount` columns left
    ///
    /// Returns the view that should receive focus. At the first column the
    /// row bounces instead and the focused view is returned unchanged.
    pub fn move_left(
        &mut self,
        amount: usize,
        scheduler: &mut Scheduler<StageTarget>,
    ) -> Option<ViewId> {
        self.shift(-(amount as isize), scheduler)
    }

    /// Move focus `amount` columns right; see [`Stage::move_left`]
    pub fn move_right(
        &mut self,
        amount: usize,
        scheduler: &mut Scheduler<StageTarget>,
    ) -> Option<ViewId> {
        self.shift(amount as isize, scheduler)
    }

    fn shift(&mut self, delta: isize, scheduler: &mut Scheduler<StageTarget>) -> Option<ViewId> {
        let row_index = self.focused_row;
        let row = &self.rows[row_index];
        let last = row.columns.len().checked_sub(1)?;
        let current = row.offset.index.min(last);

        let at_edge = (delta > 0 && current == last) || (delta < 0 && current == 0);
        if at_edge {
            self.bounce(row_index, delta.signum() as f64, scheduler);
        } else {
            let index = (current as isize + delta).clamp(0, last as isize) as usize;
            let target = self.rows[row_index].columns[index].target_x - self.settings.padding;
            self.rows[row_index].offset.index = index;
            self.scroll_to(row_index, target, scheduler);
        }

        let row = &self.rows[row_index];
        Some(row.columns[row.offset.index].view)
    }

    /// Scroll the row's focused column back into view if its resting
    /// rectangle no longer fits
    pub(super) fn keep_focused_visible(
        &mut self,
        row_index: usize,
        scheduler: &mut Scheduler<StageTarget>,
    ) {
        let row = &self.rows[row_index];
        let Some(column) = row.columns.get(row.offset.index).copied() else {
            return;
        };
        if self.is_visible(row_index, row.offset.index) {
            return;
        }
        trace!(view = column.view, "focused view left the viewport");
        self.scroll_to(row_index, column.target_x - self.settings.padding, scheduler);
    }

    /// Whether a column's resting rectangle lies inside the viewport once
    /// the row's scroll settles
    fn is_visible(&self, row_index: usize, index: usize) -> bool {
        let row = &self.rows[row_index];
        let column = row.columns[index];
        let width = self.views.get(&column.view).map_or(0, |v| v.area().width);

        let left = column.target_x - row.offset.target_scroll;
        let right = left + width as f64;
        if left < self.settings.padding {
            return false;
        }
        self.viewport.width <= 0 || right <= self.viewport.width as f64
    }

    fn scroll_to(&mut self, row_index: usize, target: f64, scheduler: &mut Scheduler<StageTarget>) {
        let scroll = self.settings.scroll;
        let row = &mut self.rows[row_index];
        if let Some(previous) = row.scroll.take() {
            scheduler.remove(previous);
        }

        row.offset.target_scroll = target;
        let action = Action::tween(
            StageTarget::ScrollX { row: row_index },
            row.offset.scroll_x,
            target,
            scroll.duration,
            scroll.easing,
        );
        row.scroll = Some(scheduler.run(action));
        trace!(row = row_index, from = row.offset.scroll_x, to = target, "scroll started");
    }

    /// Overshoot the resting scroll by one spacing unit and come back
    fn bounce(&mut self, row_index: usize, direction: f64, scheduler: &mut Scheduler<StageTarget>) {
        let bounce = self.settings.bounce;
        let spacing = self.settings.spacing;
        let row = &mut self.rows[row_index];
        if let Some(previous) = row.scroll.take() {
            scheduler.remove(previous);
        }

        let target = StageTarget::ScrollX { row: row_index };
        let rest = row.offset.target_scroll;
        let peak = rest + direction * spacing;
        let leg = bounce.duration / 2.0;
        let action = Action::sequence([
            Action::tween(target, row.offset.scroll_x, peak, leg, bounce.easing),
            Action::tween(target, peak, rest, leg, bounce.easing),
        ]);
        row.scroll = Some(scheduler.run(action));
        debug!(row = row_index, direction, "navigation past the row edge");
    }
}
