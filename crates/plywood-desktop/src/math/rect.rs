//! Axis-aligned rectangle

use serde::{Deserialize, Serialize};

use super::{Area, Point};

/// Rectangle with floating-point origin and size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at `origin` covering `area`
    #[inline]
    pub fn from_origin(origin: Point, area: Area) -> Self {
        Self::new(
            origin.x,
            origin.y,
            f64::from(area.width),
            f64::from(area.height),
        )
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    /// Clamp a point into the rectangle
    pub fn clamp(&self, p: Point) -> Point {
        // Keep the point on a pixel that is still inside
        let max_x = (self.right() - 1.0).max(self.x);
        let max_y = (self.bottom() - 1.0).max(self.y);
        Point::new(p.x.clamp(self.x, max_x), p.y.clamp(self.y, max_y))
    }
}
