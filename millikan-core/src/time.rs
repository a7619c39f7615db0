//! Clock abstraction for run timestamps
//!
//! Runs are stamped when they are generated. The clock is injected so that
//! synthetic runs are reproducible in tests:
//! - System clock (wall time, requires `std`)
//! - Fixed clock (tests, replays)

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for run records
pub trait TimeSource {
    /// Milliseconds since the Unix epoch
    fn now(&self) -> Timestamp;

    /// True when `now` follows real time
    fn is_wall_clock(&self) -> bool;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }
}

/// Wall clock backed by `std::time::SystemTime`
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Manually driven clock for seeded runs and replays
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    /// Clock stuck at `timestamp`
    pub const fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
