//! Deal plan.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{Board, PileId, TABLEAU_COUNT};

/// One atomic placement of the deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStep {
    /// Put the whole deck, face-down, onto the stock.
    FillStock,
    /// Move the stock's top card onto a tableau, turning it up if it is the
    /// last card that pile receives.
    Tableau { pile: PileId, face_up: bool },
}

/// Number of cards dealt to the tableaus.
pub const DEALT_CARDS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;

/// The full deal: fill the stock, then tableau `i` receives `i + 1` cards,
/// pile by pile.
#[must_use]
pub fn deal_plan() -> VecDeque<DealStep> {
    let mut steps = VecDeque::with_capacity(1 + DEALT_CARDS);
    steps.push_back(DealStep::FillStock);

    for i in 0..TABLEAU_COUNT {
        let pile = Board::tableau_id(i);
        for j in 0..=i {
            steps.push_back(DealStep::Tableau {
                pile,
                face_up: j == i,
            });
        }
    }
    steps
}
