//! Motion driver: animates both panels to a resolved target in lockstep.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use slidepanel_animation::{Animatable, AnimationEndReason, AnimationSpec, Easing, Lerp};
use slidepanel_core::RuntimeHandle;
use smallvec::SmallVec;

use crate::{OpenState, ReleasePlan};

/// Easing shared by every panel transition.
pub const PANEL_EASING: Easing = Easing::DECELERATE;

/// Render offsets of the two panels, interpolated as one value so they share
/// start time, duration and easing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelOffsets {
    pub sliding: f32,
    pub bottom: f32,
}

impl Lerp for PanelOffsets {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            sliding: self.sliding.lerp(&target.sliding, fraction),
            bottom: self.bottom.lerp(&target.bottom, fraction),
        }
    }
}

/// Reported back to the container when a transition ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMessage {
    Finished { target: OpenState },
    Cancelled { target: OpenState },
}

type Mailbox = Rc<RefCell<VecDeque<MotionMessage>>>;

/// Owns the single in-flight panel transition.
///
/// The driver never calls back into its owner; endings are queued and
/// collected with [`MotionDriver::take_messages`].
pub struct MotionDriver {
    offsets: Animatable<PanelOffsets>,
    mailbox: Mailbox,
}

impl MotionDriver {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            offsets: Animatable::new(PanelOffsets::default(), runtime),
            mailbox: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Starts animating from `from` by `plan.distance`, the bottom panel
    /// moving `parallax_factor` as far.
    pub fn start(&self, from: PanelOffsets, plan: &ReleasePlan, parallax_factor: f32) {
        self.offsets.snap_to(from);
        let to = PanelOffsets {
            sliding: from.sliding + plan.distance,
            bottom: from.bottom + plan.distance * parallax_factor,
        };
        let target = plan.target;
        let mailbox = Rc::clone(&self.mailbox);
        log::debug!(
            "animating panels to {target:?} over {}ms ({:?} -> {:?})",
            plan.duration_millis,
            from,
            to
        );
        self.offsets.animate_to(
            to,
            AnimationSpec::tween(plan.duration_millis, PANEL_EASING),
            move |reason, _| {
                let message = match reason {
                    AnimationEndReason::Finished => MotionMessage::Finished { target },
                    AnimationEndReason::Cancelled => MotionMessage::Cancelled { target },
                };
                mailbox.borrow_mut().push_back(message);
            },
        );
    }

    /// Stops the transition where it is. Queues a `Cancelled` message if one was running.
    pub fn cancel(&self) {
        self.offsets.stop();
    }

    pub fn is_animating(&self) -> bool {
        self.offsets.is_running()
    }

    /// Offsets as of the latest frame.
    pub fn offsets(&self) -> PanelOffsets {
        self.offsets.value()
    }

    pub fn has_messages(&self) -> bool {
        !self.mailbox.borrow().is_empty()
    }

    pub fn take_messages(&self) -> SmallVec<[MotionMessage; 2]> {
        self.mailbox.borrow_mut().drain(..).collect()
    }
}

impl std::fmt::Debug for MotionDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionDriver")
            .field("offsets", &self.offsets)
            .field("pending", &self.mailbox.borrow().len())
            .finish()
    }
}
