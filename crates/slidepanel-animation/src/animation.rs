//! Time-based animations with easing curves, driven by the runtime's frame
//! callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use slidepanel_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle, NANOS_PER_MILLI};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions applied to the linear time fraction of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Starts fast and slows to a stop: `1 - (1 - t)^(2 * factor)`.
    ///
    /// `factor = 1.0` is the classic quadratic deceleration.
    Decelerate { factor: f32 },
}

impl Easing {
    /// Quadratic deceleration, the curve used for panel settling.
    pub const DECELERATE: Easing = Easing::Decelerate { factor: 1.0 };

    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Decelerate { factor } => decelerate(*factor, fraction),
        }
    }
}

fn decelerate(factor: f32, fraction: f32) -> f32 {
    let fraction = fraction.clamp(0.0, 1.0);
    if factor == 1.0 {
        1.0 - (1.0 - fraction) * (1.0 - fraction)
    } else {
        1.0 - (1.0 - fraction).powf(2.0 * factor)
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::DECELERATE)
    }
}

/// Why an animation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEndReason {
    /// Reached its target after the full duration.
    Finished,
    /// Stopped early by `stop`, `snap_to`, or a newer `animate_to`.
    Cancelled,
}

type EndCallback<T> = Box<dyn FnOnce(AnimationEndReason, T) + 'static>;

/// Generic animatable value holder.
///
/// Each `animate_to` records the current value as the start point and
/// re-registers a frame callback every frame until the tween completes.
/// The first frame after starting fixes the start time, so progress is
/// measured in frame time rather than wall time.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    frame_clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback<T>>,
    running: bool,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            frame_clock: runtime.frame_clock(),
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            registration: None,
            on_end: None,
            running: false,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`.
    ///
    /// An animation already in flight is cancelled first and its end callback
    /// receives [`AnimationEndReason::Cancelled`].
    pub fn animate_to(
        &self,
        target: T,
        spec: AnimationSpec,
        on_end: impl FnOnce(AnimationEndReason, T) + 'static,
    ) {
        self.stop();
        {
            let mut inner = self.inner.borrow_mut();
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.on_end = Some(Box::new(on_end));
            inner.running = true;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to the given value without animating.
    pub fn snap_to(&self, value: T) {
        self.stop();
        let mut inner = self.inner.borrow_mut();
        inner.current = value.clone();
        inner.start = value.clone();
        inner.target = value;
    }

    /// Cancel the running animation, leaving the value where it is.
    pub fn stop(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start_time_nanos = None;
            let was_running = std::mem::replace(&mut inner.running, false);
            let on_end = inner.on_end.take();
            match (was_running, on_end) {
                (true, Some(on_end)) => Some((on_end, inner.current.clone())),
                _ => None,
            }
        };
        if let Some((on_end, value)) = pending {
            log::trace!("animation cancelled before reaching its target");
            on_end(AnimationEndReason::Cancelled, value);
        }
    }

    /// The most recently computed value.
    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            inner.frame_clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (spec.duration_millis * NANOS_PER_MILLI).max(1);
            let linear_progress = if spec.duration_millis == 0 {
                1.0
            } else {
                (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0)
            };
            let progress = spec.easing.transform(linear_progress);

            if linear_progress >= 1.0 {
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
                inner.start_time_nanos = None;
                inner.running = false;
                inner
                    .on_end
                    .take()
                    .map(|on_end| (on_end, inner.target.clone()))
            } else {
                inner.current = inner.start.lerp(&inner.target, progress);
                None
            }
        };

        match finished {
            Some((on_end, value)) => on_end(AnimationEndReason::Finished, value),
            None => {
                if this.borrow().running {
                    Self::schedule_frame(this);
                }
            }
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Lerp + Clone + std::fmt::Debug + 'static> std::fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("current", &inner.current)
            .field("target", &inner.target)
            .field("spec", &inner.spec)
            .field("running", &inner.running)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
