//! Renderer collaborator

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::view::SurfaceId;

use super::OutputInfo;

/// Destination rectangle in output pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// GPU-side drawing for one output frame
pub trait Renderer {
    /// Acquire the output's render target; on error the frame is skipped
    fn begin(&mut self, output: &OutputInfo) -> Result<(), RenderError>;

    fn clear(&mut self, color: [f32; 4]);

    /// Draw a surface's texture; false when the surface has no texture yet
    fn render_surface(&mut self, surface: SurfaceId, render_box: RenderBox) -> bool;

    /// Finish and present the frame
    fn end(&mut self);

    /// Present an empty, undamaged frame
    fn commit_empty(&mut self, output: &OutputInfo);
}
