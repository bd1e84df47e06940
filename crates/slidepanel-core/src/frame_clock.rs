//! One-shot frame callbacks handed out to animations.

use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;

/// Registers callbacks for the next frame the host drains.
#[derive(Clone, Debug)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Runs `callback` once with the next frame time, in nanoseconds.
    ///
    /// The registration is inactive when the runtime has already been dropped.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        FrameCallbackRegistration {
            id: self.runtime.register_frame_callback(callback),
            runtime: self.runtime.clone(),
        }
    }
}

/// A pending frame callback. Cancelling or dropping it before the frame is
/// drained removes the callback from the queue.
#[must_use = "dropping a registration cancels its callback"]
#[derive(Debug)]
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        self.unregister();
    }

    fn unregister(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.unregister();
    }
}
