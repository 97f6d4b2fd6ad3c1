//! Greedy move suggestions.
//!
//! The hint engine is a stateless scan over the board. It looks one move
//! ahead and never simulates stock cycling, so it can report no hint on a
//! board that is still solvable.
//!
//! ## Key Types
//!
//! - `Hint`: a suggested move or draw
//! - `HintEngine`: the scanner

mod engine;

pub use engine::HintEngine;

use serde::{Deserialize, Serialize};

use crate::core::{CardId, PileId};

/// A suggested next action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    /// Move `card` (and anything above it) onto `target`.
    Move { card: CardId, target: PileId },
    /// Draw from the stock; `card` is the stock's top card.
    Draw { card: CardId },
}

impl Hint {
    /// The card the hint is about.
    #[must_use]
    pub fn card(&self) -> CardId {
        match *self {
            Hint::Move { card, .. } | Hint::Draw { card } => card,
        }
    }

    /// Destination pile for a move hint.
    #[must_use]
    pub fn target(&self) -> Option<PileId> {
        match *self {
            Hint::Move { target, .. } => Some(target),
            Hint::Draw { .. } => None,
        }
    }
}
