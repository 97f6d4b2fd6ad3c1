//! Timestamp source for score records.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies record timestamps.
///
/// Timestamps are compared as strings when breaking ties on the
/// leaderboard, so implementations should produce values that sort
/// chronologically.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Wall-clock seconds since the Unix epoch, zero-padded to 20 digits.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        format!("{:020}", secs)
    }
}

/// Always returns the same timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
