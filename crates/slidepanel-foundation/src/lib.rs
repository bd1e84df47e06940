//! Pointer input, velocity tracking and vertical drag recognition.
//!
//! The host delivers timestamped pointer samples; [`VerticalDragTracker`]
//! turns them into a slop-gated drag with a release velocity.

pub mod gesture_constants;
pub mod gestures;
mod pointer;
pub mod velocity_tracker;

pub use gesture_constants::DRAG_THRESHOLD;
pub use gestures::{DragUpdate, VerticalDragTracker};
pub use pointer::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::VelocityTracker1D;
