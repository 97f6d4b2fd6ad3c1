//! Hint scan.

use super::Hint;
use crate::core::{Board, CardId};

/// Stateless hint scanner.
///
/// Scan order:
/// 1. Face-up moveable tableau cards, tableaus in pile order, each pile
///    bottom to top.
/// 2. The waste's top card.
/// 3. A draw, if the stock's top card is face-down.
///
/// The first card with a `Board::find_valid_pile` destination wins, even
/// when the move gains nothing (a bottom King to an empty tableau).
#[derive(Clone, Copy, Debug, Default)]
pub struct HintEngine;

impl HintEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The first applicable hint, or `None`.
    #[must_use]
    pub fn get_hint(&self, board: &Board) -> Option<Hint> {
        self.tableau_move(board)
            .or_else(|| self.waste_move(board))
            .or_else(|| self.draw(board))
    }

    fn tableau_move(&self, board: &Board) -> Option<Hint> {
        board.tableaus().find_map(|pile| {
            pile.cards()
                .iter()
                .copied()
                .filter(|&card| board.is_moveable(card))
                .find_map(|card| Self::destination(board, card))
        })
    }

    fn waste_move(&self, board: &Board) -> Option<Hint> {
        let card = board.waste().top_card()?;
        if !board.is_moveable(card) {
            return None;
        }
        Self::destination(board, card)
    }

    fn draw(&self, board: &Board) -> Option<Hint> {
        let card = board.stock().top_card()?;
        board.is_drawable(card).then_some(Hint::Draw { card })
    }

    fn destination(board: &Board, card: CardId) -> Option<Hint> {
        let target = board.find_valid_pile(card)?;
        Some(Hint::Move { card, target })
    }
}
