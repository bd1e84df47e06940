use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::mem;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

/// Callbacks waiting for the next frame, in registration order.
#[derive(Default)]
struct FrameQueue {
    entries: VecDeque<(FrameCallbackId, FrameCallback)>,
    next_id: FrameCallbackId,
}

impl FrameQueue {
    fn push(&mut self, callback: FrameCallback) -> FrameCallbackId {
        self.next_id += 1;
        self.entries.push_back((self.next_id, callback));
        self.next_id
    }

    fn remove(&mut self, id: FrameCallbackId) {
        self.entries.retain(|(entry, _)| *entry != id);
    }
}

struct RuntimeState {
    scheduler: Arc<dyn RuntimeScheduler>,
    queue: RefCell<FrameQueue>,
    frame_requested: Cell<bool>,
}

impl RuntimeState {
    /// Asks the host for a frame unless one is already pending.
    fn request_frame(&self) {
        if !self.frame_requested.replace(true) {
            self.scheduler.schedule_frame();
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.queue.borrow().entries.is_empty()
    }

    fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.queue.borrow_mut().push(callback);
        self.request_frame();
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut queue = self.queue.borrow_mut();
        queue.remove(id);
        if queue.entries.is_empty() {
            self.frame_requested.set(false);
        }
    }

    fn drain(&self, frame_time_nanos: u64) {
        let due = mem::take(&mut self.queue.borrow_mut().entries);
        self.frame_requested.set(false);
        log::trace!(
            "running {} frame callback(s) at {frame_time_nanos}ns",
            due.len()
        );
        // Anything registered from inside a callback waits for the next frame.
        for (_, callback) in due {
            callback(frame_time_nanos);
        }
        if self.has_frame_callbacks() {
            self.frame_requested.set(true);
        }
    }
}

/// Owns the frame-callback queue. Dropping the runtime deactivates every
/// outstanding [`RuntimeHandle`].
pub struct Runtime {
    state: Rc<RuntimeState>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            state: Rc::new(RuntimeState {
                scheduler,
                queue: RefCell::default(),
                frame_requested: Cell::new(false),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.state.frame_requested.get()
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("needs_frame", &self.needs_frame())
            .field("pending_callbacks", &self.state.queue.borrow().entries.len())
            .finish()
    }
}

/// Weak access to a [`Runtime`], handed to animations and the host loop.
///
/// Every operation is a no-op once the runtime is gone.
#[derive(Clone)]
pub struct RuntimeHandle {
    state: Weak<RuntimeState>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let state = self.state.upgrade()?;
        Some(state.register(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(state) = self.state.upgrade() {
            state.cancel(id);
        }
    }

    /// Runs every callback registered before this call with `frame_time_nanos`.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(state) = self.state.upgrade() {
            state.drain(frame_time_nanos);
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| state.has_frame_callbacks())
    }

    pub fn needs_frame(&self) -> bool {
        self.state
            .upgrade()
            .is_some_and(|state| state.frame_requested.get())
    }

    pub fn is_alive(&self) -> bool {
        self.state.strong_count() > 0
    }
}

impl std::fmt::Debug for RuntimeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
