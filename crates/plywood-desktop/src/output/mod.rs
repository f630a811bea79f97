//! Displays and their arrangement
//!
//! [`OutputLayout`] places displays left to right and answers the questions
//! the stage and cursor ask about them: the combined (intersected) viewport
//! size and the pointer's allowed extents.

mod render;

pub use render::{RenderBox, Renderer};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::math::{Area, Point, Rect};

/// A display as placed in the layout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputInfo {
    pub name: String,
    /// Top-left corner in layout space
    pub origin: Point,
    /// Current mode in logical pixels
    pub resolution: Area,
    pub scale: f64,
}

impl OutputInfo {
    /// Unplaced output at scale 1
    pub fn new(name: impl Into<String>, resolution: Area) -> Self {
        Self {
            name: name.into(),
            origin: Point::ZERO,
            resolution,
            scale: 1.0,
        }
    }

    /// Builder: set the scale factor
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Layout-space rectangle covered by the output
    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.origin, self.resolution)
    }
}

/// Ordered set of displays placed side by side
#[derive(Clone, Debug, Default)]
pub struct OutputLayout {
    outputs: Vec<OutputInfo>,
}

impl OutputLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputInfo> {
        self.outputs.iter()
    }

    pub fn get(&self, name: &str) -> Option<&OutputInfo> {
        self.outputs.iter().find(|o| o.name == name)
    }

    /// Add an output right of the existing ones; replaces an output of the
    /// same name
    pub fn insert(&mut self, mut output: OutputInfo) {
        self.outputs.retain(|o| o.name != output.name);
        self.relayout();
        output.origin = Point::new(self.right_edge(), 0.0);
        debug!(
            output = %output.name,
            x = output.origin.x,
            width = output.resolution.width,
            height = output.resolution.height,
            "output placed"
        );
        self.outputs.push(output);
    }

    /// Apply a mode change; returns false for an unknown output
    pub fn update_mode(&mut self, name: &str, resolution: Area) -> bool {
        let Some(output) = self.outputs.iter_mut().find(|o| o.name == name) else {
            warn!(output = name, "mode change for unknown output");
            return false;
        };
        output.resolution = resolution;
        self.relayout();
        true
    }

    /// Remove an output and close the gap it leaves
    pub fn remove(&mut self, name: &str) -> Option<OutputInfo> {
        let index = self.outputs.iter().position(|o| o.name == name)?;
        let removed = self.outputs.remove(index);
        self.relayout();
        Some(removed)
    }

    /// Layout-space origin of the named output
    pub fn output_coordinates(&self, name: &str) -> Option<Point> {
        self.get(name).map(|o| o.origin)
    }

    /// Minimum width and minimum height across all outputs
    pub fn combined_resolution(&self) -> Area {
        let mut outputs = self.outputs.iter();
        let Some(first) = outputs.next() else {
            return Area::ZERO;
        };
        outputs.fold(first.resolution, |acc, o| acc.min(o.resolution))
    }

    /// Bounding rectangle of every output
    pub fn extents(&self) -> Option<Rect> {
        let mut outputs = self.outputs.iter();
        let first = outputs.next()?.bounds();
        Some(outputs.fold(first, |acc, o| acc.union(&o.bounds())))
    }

    fn right_edge(&self) -> f64 {
        self.outputs
            .iter()
            .map(|o| o.bounds().right())
            .fold(0.0, f64::max)
    }

    fn relayout(&mut self) {
        let mut x = 0.0;
        for output in &mut self.outputs {
            output.origin = Point::new(x, 0.0);
            x += output.resolution.width as f64;
        }
    }
}
