//! Game event types.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, PileId, Position};
use crate::game::{GameState, InvalidAction};
use crate::hints::Hint;

/// A change to one presentation-relevant property of a card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardChange {
    /// The card joined a pile or left one (`None`).
    Pile(Option<PileId>),
    Position(Position),
    Order(i32),
    FaceUp(bool),
    Visible(bool),
    Interactable(bool),
}

/// A notification published by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A single card property changed.
    Card { card: CardId, change: CardChange },

    /// A pile's contents changed; `len` is the new card count.
    PileChanged { pile: PileId, len: usize },

    /// Every pile was emptied and every card reset to the stock origin.
    BoardReset,

    /// The state machine moved.
    StateChanged { from: GameState, to: GameState },

    /// New score value.
    PointsChanged(i32),

    /// New move count.
    MovesChanged(u32),

    /// Whether the undo history is non-empty.
    UndoAvailable(bool),

    /// Result of a hint request (`None` when no hint applies).
    Hint(Option<Hint>),

    /// A rejected intent, for presentation-level feedback.
    InvalidAction(InvalidAction),

    /// Auto-resolve finished and the score was recorded.
    Won { points: i32 },
}

impl GameEvent {
    /// Shorthand for a card change event.
    #[must_use]
    pub fn card(card: CardId, change: CardChange) -> Self {
        Self::Card { card, change }
    }

    /// Check if this is a card event for the given card.
    #[must_use]
    pub fn is_about_card(&self, id: CardId) -> bool {
        matches!(self, GameEvent::Card { card, .. } if *card == id)
    }
}
