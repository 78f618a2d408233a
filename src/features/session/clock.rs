//! Tick source for playback.
//!
//! The ticker is polled by the caller's event loop instead of running on its
//! own thread, so a stopped ticker can never deliver a late tick.

use std::time::{Duration, Instant};

/// Cooperative fixed-interval tick source.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    anchor: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker.
    ///
    /// A zero interval is clamped to one millisecond.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            anchor: None,
        }
    }

    /// One tick per second.
    #[must_use]
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Interval between ticks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Start counting from `now`. Restarting an active ticker is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.anchor.is_none() {
            self.anchor = Some(now);
        }
    }

    /// Stop ticking. Any partial interval is discarded.
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    /// Whether the ticker is counting.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Number of whole intervals elapsed since the last poll.
    ///
    /// The anchor moves forward by exactly the returned number of intervals,
    /// so the remainder carries into the next poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };

        let elapsed = now.saturating_duration_since(anchor);
        let ticks = elapsed.as_nanos() / self.interval.as_nanos();
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);

        if ticks > 0 {
            self.anchor = Some(anchor + self.interval * ticks);
        }
        ticks
    }

    /// Time left until the next tick, or `None` when stopped.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        let anchor = self.anchor?;
        let elapsed = now.saturating_duration_since(anchor);
        Some(self.interval.saturating_sub(elapsed))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::every_second()
    }
}
