//! Brush definitions for painting (solid colors, gradients)

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Colors are distributed evenly from the top edge to the bottom edge.
    VerticalGradient(Vec<Color>),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn vertical_gradient(colors: Vec<Color>) -> Self {
        Brush::VerticalGradient(colors)
    }
}
