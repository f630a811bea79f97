//! Geometry types shared by the stage, cursor and outputs

mod area;
mod point;
mod rect;

pub use area::Area;
pub use point::Point;
pub use rect::Rect;
