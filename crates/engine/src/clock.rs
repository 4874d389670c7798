//! Fixed-interval animation clock.
//!
//! Time is passed in as milliseconds so the clock stays deterministic and
//! testable; the host converts from `Instant`.

use crate::types::{MIN_TICK_MS, TICK_MS};

#[derive(Debug, Clone)]
pub struct AnimationClock {
    interval_ms: u64,
    last_tick_ms: u64,
    ticks: u64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl AnimationClock {
    /// Intervals below [`MIN_TICK_MS`] are raised to it.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(MIN_TICK_MS) as u64,
            last_tick_ms: 0,
            ticks: 0,
        }
    }

    /// Interval for a frames-per-second target (`0` is treated as 1 fps).
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1000 / fps.max(1))
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Ticks fired so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Milliseconds until the next tick is due (0 if overdue).
    pub fn timeout_ms(&self, now_ms: u64) -> u64 {
        (self.last_tick_ms + self.interval_ms).saturating_sub(now_ms)
    }

    /// Fire at most one tick. Missed ticks are dropped rather than replayed,
    /// so a stalled host resumes at normal speed instead of fast-forwarding.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_tick_ms) < self.interval_ms {
            return false;
        }
        self.last_tick_ms = now_ms;
        self.ticks += 1;
        true
    }
}
