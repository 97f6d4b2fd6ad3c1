//! Score and move counters.

use serde::{Deserialize, Serialize};

/// The match score.
///
/// `add` never lets the score drop below zero. `set` writes any value as-is,
/// which is how undo restores a snapshot that clamped arithmetic could not
/// reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Points {
    value: i32,
}

impl Points {
    /// A zero score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Overwrite the score.
    pub fn set(&mut self, value: i32) {
        self.value = value;
    }

    /// Add a delta, clamping the result at zero.
    ///
    /// Returns the change that was actually applied, so callers can reverse
    /// it exactly.
    pub fn add(&mut self, delta: i32) -> i32 {
        let before = self.value;
        self.value = before.saturating_add(delta).max(0);
        self.value - before
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Number of moves made in the current match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounter {
    moves: u32,
}

impl MoveCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.moves
    }

    pub fn increment(&mut self) {
        self.moves += 1;
    }

    pub fn reset(&mut self) {
        self.moves = 0;
    }
}
