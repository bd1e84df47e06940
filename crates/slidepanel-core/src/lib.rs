//! Core runtime for the sliding panel container.
//!
//! Everything here runs on the host's UI thread. The host delivers pointer
//! events and frame ticks serially; animations register one-shot frame
//! callbacks and re-register themselves until they settle.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, DefaultScheduler, RuntimeScheduler, SystemClock};
pub use runtime::{Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;

/// Nanoseconds per millisecond, for frame time conversions.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
