//! Stage: the scrolling tiling layout
//!
//! Views sit in rows, left to right in insertion order. Each row carries a
//! focused column index and a horizontal scroll offset; rendering and
//! hit-testing happen through that offset. Only the focused row is laid out
//! and drawn today, but the model keeps a list of rows.
//!
//! The stage never mutates geometry from inside an animation. Layout changes
//! record a resting target and hand tweens to the [`Scheduler`]; the frame
//! driver feeds the resulting [`Update`]s back through [`Stage::apply`].

mod layout;
mod render;
mod scroll;
mod snapshot;

pub use render::ViewHit;
pub use snapshot::{RowSnapshot, StageSnapshot, ViewSnapshot};

use std::collections::HashMap;

use plywood_anim::{ActionId, Scheduler, Update};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::math::{Area, Point};
use crate::settings::StageSettings;
use crate::view::{SurfaceId, View, ViewId};

/// Animatable stage parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StageTarget {
    /// Horizontal scroll of a row
    ScrollX { row: usize },
    /// Horizontal position of a view
    ViewX { view: ViewId },
}

/// Per-row focus and scroll state
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnOffset {
    /// Focused column
    pub index: usize,
    /// Current (possibly animating) scroll in pixels
    pub scroll_x: f64,
    /// Scroll the row is heading to
    pub target_scroll: f64,
}

#[derive(Clone, Copy, Debug)]
struct Column {
    view: ViewId,
    /// Resting x once reflow settles
    target_x: f64,
}

#[derive(Debug, Default)]
struct Row {
    columns: Vec<Column>,
    offset: ColumnOffset,
    reflow: Option<ActionId>,
    scroll: Option<ActionId>,
}

impl Row {
    fn position_of(&self, id: ViewId) -> Option<usize> {
        self.columns.iter().position(|c| c.view == id)
    }
}

/// Layout engine owning every mapped view
pub struct Stage {
    settings: StageSettings,
    views: HashMap<ViewId, Box<dyn View>>,
    rows: Vec<Row>,
    focused_row: usize,
    /// Combined output resolution
    viewport: Area,
    /// Height the views were last centered for
    cross_axis: i32,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("rows", &self.rows)
            .field("focused_row", &self.focused_row)
            .field("viewport", &self.viewport)
            .field("cross_axis", &self.cross_axis)
            .finish_non_exhaustive()
    }
}

impl Stage {
    /// Create an empty stage with a single row
    pub fn new(settings: StageSettings) -> Self {
        Self {
            settings,
            views: HashMap::new(),
            rows: vec![Row::default()],
            focused_row: 0,
            viewport: Area::ZERO,
            cross_axis: 0,
        }
    }

    pub fn settings(&self) -> &StageSettings {
        &self.settings
    }

    /// Number of mapped views
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(&id)
    }

    pub fn view(&self, id: ViewId) -> Option<&dyn View> {
        self.views.get(&id).map(|v| v.as_ref())
    }

    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut (dyn View + 'static)> {
        self.views.get_mut(&id).map(|v| v.as_mut())
    }

    /// Find the mapped view whose root surface is `surface`
    pub fn view_by_surface(&self, surface: SurfaceId) -> Option<ViewId> {
        self.views
            .iter()
            .find(|(_, view)| view.surface() == surface)
            .map(|(id, _)| *id)
    }

    /// Row and column of a view
    pub fn locate(&self, id: ViewId) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(r, row)| row.position_of(id).map(|c| (r, c)))
    }

    /// Views of the focused row, left to right
    pub fn row_views(&self) -> Vec<ViewId> {
        self.focused().columns.iter().map(|c| c.view).collect()
    }

    /// View at the focused row's focused column
    pub fn focused_view(&self) -> Option<ViewId> {
        let row = self.focused();
        row.columns.get(row.offset.index).map(|c| c.view)
    }

    pub fn focused_row(&self) -> usize {
        self.focused_row
    }

    /// Focus and scroll state of the focused row
    pub fn column_offset(&self) -> ColumnOffset {
        self.focused().offset
    }

    pub fn viewport(&self) -> Area {
        self.viewport
    }

    pub fn cross_axis(&self) -> i32 {
        self.cross_axis
    }

    /// Resting x of a view
    pub fn target_x(&self, id: ViewId) -> Option<f64> {
        let (row, column) = self.locate(id)?;
        Some(self.rows[row].columns[column].target_x)
    }

    /// Append a view to the end of the focused row
    ///
    /// The view appears in place; nothing animates. Returns false when the id
    /// is already on the stage.
    pub fn insert(&mut self, id: ViewId, mut view: Box<dyn View>) -> bool {
        if self.views.contains_key(&id) {
            warn!(view = id, "view already on stage");
            return false;
        }

        let spacing = self.settings.spacing;
        let x = match self.focused().columns.last() {
            Some(last) => {
                let width = self.views.get(&last.view).map_or(0, |v| v.area().width);
                last.target_x + width as f64 + spacing
            }
            None => self.settings.padding,
        };

        view.set_position(Point::new(x, 0.0));
        layout::center_view(view.as_mut(), self.cross_axis, self.settings.cross_axis_factor);

        let row = self.focused_row;
        self.rows[row].columns.push(Column { view: id, target_x: x });
        self.views.insert(id, view);
        info!(view = id, row, x, "inserted view");
        true
    }

    /// Take a view off the stage and reflow the views after it
    ///
    /// The focused column keeps pointing at the same view when an earlier
    /// one goes, and the row scrolls if that view would rest off-screen.
    pub fn remove(
        &mut self,
        id: ViewId,
        scheduler: &mut Scheduler<StageTarget>,
    ) -> Option<Box<dyn View>> {
        let Some((row_index, index)) = self.locate(id) else {
            warn!(view = id, "remove of a view not on stage");
            return None;
        };
        let view = self.views.remove(&id)?;

        let padding = self.settings.padding;
        let row = &mut self.rows[row_index];
        let mut gap = view.area().width as f64 + self.settings.spacing;

        // The new first column must not land left of the padding.
        if index == 0 {
            if let Some(second) = row.columns.get(1) {
                let new_x = second.target_x - gap;
                if new_x < padding {
                    gap -= padding - new_x;
                }
            }
        }

        row.columns.remove(index);
        let len = row.columns.len();
        if index < row.offset.index
            || (index == row.offset.index && row.offset.index >= len && row.offset.index > 0)
        {
            row.offset.index -= 1;
        }

        for column in &mut row.columns[index..] {
            column.target_x -= gap;
        }
        debug!(view = id, row = row_index, index, gap, "removed view");

        self.start_reflow(row_index, scheduler);
        self.keep_focused_visible(row_index, scheduler);
        Some(view)
    }

    /// Apply animation output
    ///
    /// Updates for views that have left the stage are dropped.
    pub fn apply(&mut self, updates: impl IntoIterator<Item = Update<StageTarget>>) {
        for update in updates {
            match update.target {
                StageTarget::ScrollX { row } => {
                    if let Some(row) = self.rows.get_mut(row) {
                        row.offset.scroll_x = update.value;
                    }
                }
                StageTarget::ViewX { view } => {
                    if let Some(view) = self.views.get_mut(&view) {
                        let position = view.position();
                        view.set_position(Point::new(update.value, position.y));
                    }
                }
            }
        }
    }

    fn focused(&self) -> &Row {
        &self.rows[self.focused_row]
    }
}
