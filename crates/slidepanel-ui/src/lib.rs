//! Draggable two-panel container.
//!
//! A fixed bottom panel peeks above the container's bottom edge while a
//! sliding panel is dragged between the peek line and fully open. The pieces
//! are framework-free and consumed in this order:
//!
//! - [`VerticalDragTracker`](slidepanel_foundation::VerticalDragTracker) turns
//!   pointer samples into a slop-gated drag and a release velocity.
//! - [`position`] bounds the drag and resolves a release into a target state,
//!   a distance and a duration.
//! - [`MotionDriver`] animates both panels to the target and reports
//!   completion back as a [`MotionMessage`].
//!
//! [`DraggedPanelLayout`] wires them together behind the host capability
//! traits in [`capabilities`].

mod attributes;
pub mod capabilities;
mod error;
mod geometry;
mod layout;
mod motion;
pub mod position;
mod state;
mod surface;

pub use attributes::{
    sanitize_parallax_factor, PanelAttributes, ShadowDrawable, DEFAULT_PARALLAX_FACTOR,
    DEFAULT_PEEK_HEIGHT, MAX_PARALLAX_FACTOR, MIN_PARALLAX_FACTOR,
};
pub use capabilities::{Layoutable, Measurable, Paintable, TouchInterceptable};
pub use error::PanelLayoutError;
pub use geometry::GeometryConfig;
pub use layout::{DraggedPanelLayout, HostRequests, RenderOutput};
pub use motion::{MotionDriver, MotionMessage, PanelOffsets, PANEL_EASING};
pub use position::{ReleasePlan, FLING_VELOCITY_THRESHOLD, SNAP_DURATION_MILLIS};
pub use state::{OpenState, PanelState};
pub use surface::{LayerType, PanelSurface, Visibility};

pub use slidepanel_foundation::{PointerEvent, PointerEventKind};
pub use slidepanel_graphics::{Brush, Color, Dp, DrawScope, Rect, Size};
pub use slidepanel_layout::Constraints;
