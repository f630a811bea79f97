//! Serializable stage state for diagnostics

use serde::{Deserialize, Serialize};

use crate::math::{Area, Point};
use crate::view::ViewId;

use super::{ColumnOffset, Stage};

/// One view as laid out
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub id: ViewId,
    pub position: Point,
    pub target_x: f64,
    pub area: Area,
}

/// One row, left to right
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub offset: ColumnOffset,
    pub views: Vec<ViewSnapshot>,
}

/// Whole-stage dump
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub focused_row: usize,
    pub viewport: Area,
    pub cross_axis: i32,
    pub rows: Vec<RowSnapshot>,
}

impl StageSnapshot {
    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Stage {
    /// Capture rows, offsets and view geometry
    pub fn snapshot(&self) -> StageSnapshot {
        let rows = self
            .rows
            .iter()
            .map(|row| RowSnapshot {
                offset: row.offset,
                views: row
                    .columns
                    .iter()
                    .filter_map(|column| {
                        let view = self.views.get(&column.view)?;
                        Some(ViewSnapshot {
                            id: column.view,
                            position: view.position(),
                            target_x: column.target_x,
                            area: view.area(),
                        })
                    })
                    .collect(),
            })
            .collect();

        StageSnapshot {
            focused_row: self.focused_row,
            viewport: self.viewport,
            cross_axis: self.cross_axis,
            rows,
        }
    }
}
