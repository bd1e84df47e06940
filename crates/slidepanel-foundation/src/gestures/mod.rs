mod drag;

pub use drag::{DragUpdate, VerticalDragTracker};
