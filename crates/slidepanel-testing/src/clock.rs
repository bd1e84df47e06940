use std::sync::atomic::{AtomicU64, Ordering};

use slidepanel_core::{Clock, NANOS_PER_MILLI};

/// A [`Clock`] that only moves when told to.
///
/// Frame times and pointer timestamps are both read from it, so a test
/// controls exactly how much time passes between samples and frames.
#[derive(Debug, Default)]
pub struct ManualClock {
    nanos: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_millis(&self, millis: u64) {
        self.nanos
            .fetch_add(millis * NANOS_PER_MILLI, Ordering::Relaxed);
    }

    pub fn now_nanos(&self) -> u64 {
        self.nanos.load(Ordering::Relaxed)
    }

    pub fn now_millis(&self) -> i64 {
        (self.now_nanos() / NANOS_PER_MILLI) as i64
    }
}

impl Clock for ManualClock {
    type Instant = u64;

    fn now(&self) -> u64 {
        self.now_nanos()
    }

    fn elapsed_millis(&self, since: u64) -> u64 {
        self.now_nanos().saturating_sub(since) / NANOS_PER_MILLI
    }
}
