//! FIFO buffer of pending notifications.

use super::event::GameEvent;

/// Pending events in emission order.
///
/// The engine pushes; the presentation layer drains. Events accumulate until
/// drained. A headless caller that never reads them should disable the queue
/// with `set_enabled(false)`, which drops pushes instead of buffering them.
#[derive(Clone, Debug)]
pub struct EventQueue {
    events: Vec<GameEvent>,
    enabled: bool,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            enabled: true,
        }
    }
}

impl EventQueue {
    /// Create an empty, enabled queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Dropped while the queue is disabled.
    pub fn push(&mut self, event: GameEvent) {
        if self.enabled {
            self.events.push(event);
        }
    }

    /// Turn buffering on or off. Disabling also drops anything pending.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.events.clear();
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
