//! Results of player intents.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, PileId};

/// Why an intent was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidAction {
    /// The card is face-down, or buried on the waste or a foundation.
    CardNotMoveable { card: CardId },
    /// Tap-to-move found no pile accepting the card.
    NoValidDestination { card: CardId },
    /// The chosen pile does not accept the card.
    IllegalMove { card: CardId, target: PileId },
    /// A refill was requested while the stock still has cards.
    StockNotEmpty,
}

impl std::fmt::Display for InvalidAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidAction::CardNotMoveable { card } => write!(f, "{} cannot be moved", card),
            InvalidAction::NoValidDestination { card } => write!(f, "no pile accepts {}", card),
            InvalidAction::IllegalMove { card, target } => {
                write!(f, "{} does not accept {}", target, card)
            }
            InvalidAction::StockNotEmpty => write!(f, "stock is not empty"),
        }
    }
}

/// What became of a player intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A command ran (or the state changed).
    Applied,
    /// Rejected by the rules; an `InvalidAction` event was published.
    Invalid(InvalidAction),
    /// Nothing to do in the current state.
    Ignored,
}

impl ActionOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, ActionOutcome::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let card = CardId::new(0);
        let reason = InvalidAction::IllegalMove {
            card,
            target: PileId::new(6),
        };
        assert_eq!(reason.to_string(), "Pile(6) does not accept Spade Ace");
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(ActionOutcome::Applied.is_applied());
        assert!(ActionOutcome::Invalid(InvalidAction::StockNotEmpty).is_invalid());
        assert!(!ActionOutcome::Ignored.is_applied());
        assert!(!ActionOutcome::Ignored.is_invalid());
    }
}
