//! Host capability traits.
//!
//! A host framework drives the container through these four entry points;
//! the gesture and motion state behind them never depends on the host.

use slidepanel_foundation::PointerEvent;
use slidepanel_graphics::{DrawScope, Rect, Size};
use slidepanel_layout::Constraints;

use crate::PanelLayoutError;

pub trait Measurable {
    fn measure(&mut self, constraints: Constraints) -> Size;
}

pub trait Layoutable {
    /// Called once per layout pass with the container's assigned bounds.
    fn layout(&mut self, bounds: Rect) -> Result<(), PanelLayoutError>;
}

pub trait Paintable {
    fn draw(&mut self, scope: &mut dyn DrawScope);
}

pub trait TouchInterceptable {
    /// Sees every sample before the children. Returning `true` steals the
    /// rest of the gesture from them.
    fn on_intercept_pointer_event(&mut self, event: &PointerEvent) -> bool;

    /// Handles samples the container is the target of.
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool;
}
