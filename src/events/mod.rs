//! Outbound notifications for the presentation layer.
//!
//! Every observable mutation of the board, the score counters, or the game
//! state machine is published as a `GameEvent`. The engine only defines the
//! events and queues them in emission order; how they reach a renderer is
//! up to the caller, who drains the queue after each intent or step.
//!
//! ## Key Types
//!
//! - `GameEvent`: a single notification
//! - `CardChange`: which per-card property changed
//! - `EventQueue`: FIFO buffer of pending notifications

mod event;
mod queue;

pub use event::{CardChange, GameEvent};
pub use queue::EventQueue;
