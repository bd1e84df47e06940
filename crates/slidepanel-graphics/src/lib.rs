//! Pure math/data for drawing & units used by the sliding panel container
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! and unit types shared by the layout, gesture and paint code.

mod brush;
mod color;
mod geometry;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{DrawPrimitive, DrawScope, Point, Rect, Size};
    pub use crate::unit::Dp;
}
