//! Integer extent of a surface or display

use serde::{Deserialize, Serialize};

use super::Point;

/// Width and height in whole logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    pub width: i32,
    pub height: i32,
}

impl Area {
    /// Zero area
    pub const ZERO: Area = Area {
        width: 0,
        height: 0,
    };

    /// Create a new area
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Area) -> Area {
        Area::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Whether a point relative to the top-left corner lies inside
    #[inline]
    pub fn contains(self, local: Point) -> bool {
        local.x >= 0.0
            && local.y >= 0.0
            && local.x < f64::from(self.width)
            && local.y < f64::from(self.height)
    }

    /// Scale both dimensions, truncating
    #[inline]
    pub fn scale(self, factor: f64) -> Area {
        Area::new(
            (f64::from(self.width) * factor) as i32,
            (f64::from(self.height) * factor) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_min() {
        let a = Area::new(1920, 1080).min(Area::new(2560, 900));
        assert_eq!(a, Area::new(1920, 900));
    }

    #[test]
    fn test_area_contains_is_half_open() {
        let a = Area::new(100, 50);
        assert!(a.contains(Point::new(0.0, 0.0)));
        assert!(a.contains(Point::new(99.5, 49.5)));
        assert!(!a.contains(Point::new(100.0, 10.0)));
        assert!(!a.contains(Point::new(-0.5, 10.0)));
    }

    #[test]
    fn test_area_scale() {
        assert_eq!(Area::new(100, 51).scale(1.5), Area::new(150, 76));
    }

    #[test]
    fn test_area_is_empty() {
        assert!(Area::ZERO.is_empty());
        assert!(Area::new(10, 0).is_empty());
        assert!(!Area::new(1, 1).is_empty());
    }
}
