//! Vertical drag recognizer with touch slop and release velocity.

use crate::pointer::{PointerEvent, PointerEventKind};
use crate::velocity_tracker::VelocityTracker1D;

/// Outcome of feeding one pointer sample to a [`VerticalDragTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// No live gesture, or a sample that does not apply (e.g. UP without DOWN).
    Ignored,
    /// A gesture is tracked but has not moved past the touch slop.
    Pending,
    /// This sample confirmed the drag. Translations are measured from `anchor_y`.
    Started { anchor_y: f32 },
    /// A confirmed drag moved; `delta_y` is the distance from the anchor.
    Dragged { delta_y: f32 },
    /// The gesture ended. `velocity` is in px/ms, negative when moving up.
    Released { velocity: f32, was_dragging: bool },
}

#[derive(Debug, Clone)]
struct DragSession {
    origin_y: f32,
    anchor_y: Option<f32>,
    velocity: VelocityTracker1D,
}

/// Turns a DOWN/MOVE/UP stream into a slop-gated vertical drag.
///
/// At most one session exists at a time; a DOWN always starts a fresh one.
/// Every sample of the session, including the DOWN and the one that crosses
/// the slop, is fed to the velocity tracker.
#[derive(Debug, Clone)]
pub struct VerticalDragTracker {
    touch_slop: f32,
    session: Option<DragSession>,
}

impl VerticalDragTracker {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop: touch_slop.max(0.0),
            session: None,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// True while a DOWN has been seen and no UP/cancel has closed it.
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// True once the live session has crossed the slop (or was confirmed).
    pub fn is_dragging(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.anchor_y.is_some())
    }

    /// Dispatches on the event kind. A pointer cancel is released with zero
    /// velocity so the caller snaps instead of flinging.
    pub fn process(&mut self, event: &PointerEvent) -> DragUpdate {
        match event.kind {
            PointerEventKind::Down => {
                self.on_down(event.y(), event.uptime_millis);
                DragUpdate::Pending
            }
            PointerEventKind::Move => self.on_move(event.y(), event.uptime_millis),
            PointerEventKind::Up => self.on_up(event.y(), event.uptime_millis),
            PointerEventKind::Cancel => match self.session.take() {
                Some(session) => DragUpdate::Released {
                    velocity: 0.0,
                    was_dragging: session.anchor_y.is_some(),
                },
                None => DragUpdate::Ignored,
            },
        }
    }

    /// Records the touch origin. Dragging is not confirmed yet.
    pub fn on_down(&mut self, y: f32, uptime_millis: i64) {
        let mut velocity = VelocityTracker1D::new();
        velocity.add_data_point(uptime_millis, y);
        self.session = Some(DragSession {
            origin_y: y,
            anchor_y: None,
            velocity,
        });
    }

    /// Confirms the live session without waiting for the slop, anchoring at `y`.
    ///
    /// Used when the container itself is the touch target for the DOWN.
    pub fn confirm(&mut self, y: f32) -> DragUpdate {
        match self.session.as_mut() {
            Some(session) => {
                session.anchor_y = Some(y);
                DragUpdate::Started { anchor_y: y }
            }
            None => DragUpdate::Ignored,
        }
    }

    pub fn on_move(&mut self, y: f32, uptime_millis: i64) -> DragUpdate {
        let touch_slop = self.touch_slop;
        let Some(session) = self.session.as_mut() else {
            return DragUpdate::Ignored;
        };
        session.velocity.add_data_point(uptime_millis, y);

        match session.anchor_y {
            Some(anchor_y) => DragUpdate::Dragged {
                delta_y: y - anchor_y,
            },
            None if (y - session.origin_y).abs() > touch_slop => {
                log::trace!(
                    "vertical drag confirmed after {:.1}px (slop {:.1}px)",
                    y - session.origin_y,
                    touch_slop
                );
                session.anchor_y = Some(y);
                DragUpdate::Started { anchor_y: y }
            }
            None => DragUpdate::Pending,
        }
    }

    /// Finalizes the velocity and clears the session.
    pub fn on_up(&mut self, y: f32, uptime_millis: i64) -> DragUpdate {
        let Some(mut session) = self.session.take() else {
            return DragUpdate::Ignored;
        };
        session.velocity.add_data_point(uptime_millis, y);
        DragUpdate::Released {
            velocity: session.velocity.velocity_per_millis(),
            was_dragging: session.anchor_y.is_some(),
        }
    }

    /// Drops the live session, if any. Returns whether one existed.
    pub fn reset(&mut self) -> bool {
        self.session.take().is_some()
    }
}

impl Default for VerticalDragTracker {
    fn default() -> Self {
        Self::new(crate::DRAG_THRESHOLD)
    }
}

#[cfg(test)]
#[path = "../tests/drag_tests.rs"]
mod tests;
