//! Release velocity of a vertical pointer gesture.
//!
//! Uses the impulse strategy: each pair of consecutive samples adds the work
//! needed to reach its segment velocity, and the final velocity is recovered
//! from the accumulated kinetic energy. This tolerates unevenly spaced
//! samples better than a plain average.

/// Samples kept per gesture.
const HISTORY_SIZE: usize = 20;

/// A sample older than this, measured from the newest one, is ignored.
pub const ASSUME_STOPPED_MILLIS: i64 = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Sample {
    uptime_millis: i64,
    y: f32,
}

/// Ring buffer of timestamped positions along one axis.
///
/// ```
/// use slidepanel_foundation::VelocityTracker1D;
///
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_data_point(0, 0.0);
/// tracker.add_data_point(10, -20.0);
/// tracker.add_data_point(20, -40.0);
/// assert!(tracker.velocity_per_millis() < -1.5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    samples: [Sample; HISTORY_SIZE],
    newest: usize,
    len: usize,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_data_point(&mut self, uptime_millis: i64, y: f32) {
        if self.len > 0 {
            self.newest = (self.newest + 1) % HISTORY_SIZE;
        }
        self.samples[self.newest] = Sample { uptime_millis, y };
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    /// Signed velocity in px/ms; negative when moving up.
    ///
    /// One millisecond is the shortest tracking interval, so thresholds in
    /// px/ms compare the same way at any sample rate. Returns 0 with fewer
    /// than two recent samples.
    pub fn velocity_per_millis(&self) -> f32 {
        let mut window = [Sample::default(); HISTORY_SIZE];
        let count = self.recent_oldest_first(&mut window);
        if count < 2 {
            return 0.0;
        }

        let mut work = 0.0f32;
        for (segment, pair) in window[..count].windows(2).enumerate() {
            let elapsed = (pair[1].uptime_millis - pair[0].uptime_millis) as f32;
            if elapsed == 0.0 {
                continue;
            }
            let segment_velocity = (pair[1].y - pair[0].y) / elapsed;
            work += (segment_velocity - kinetic_energy_to_velocity(work)) * segment_velocity.abs();
            if segment == 0 {
                work *= 0.5;
            }
        }

        let velocity = kinetic_energy_to_velocity(work);
        if velocity.is_finite() {
            velocity
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copies the samples within [`ASSUME_STOPPED_MILLIS`] of the newest one
    /// into `window`, oldest first, and returns how many were copied.
    fn recent_oldest_first(&self, window: &mut [Sample; HISTORY_SIZE]) -> usize {
        if self.len == 0 {
            return 0;
        }
        let newest_time = self.samples[self.newest].uptime_millis;
        let count = (0..self.len)
            .map(|back| self.samples[(self.newest + HISTORY_SIZE - back) % HISTORY_SIZE])
            .take_while(|sample| newest_time - sample.uptime_millis <= ASSUME_STOPPED_MILLIS)
            .count();
        for (slot, back) in (0..count).rev().enumerate() {
            window[slot] = self.samples[(self.newest + HISTORY_SIZE - back) % HISTORY_SIZE];
        }
        count
    }
}

/// `E = v² / 2` with unit mass, keeping the sign of the energy.
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
