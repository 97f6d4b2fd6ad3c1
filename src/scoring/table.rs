//! Fixed score deltas.

use serde::{Deserialize, Serialize};

use crate::core::PileType;

/// Score deltas applied by commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTable {
    pub waste_to_tableau: i32,
    pub waste_to_foundation: i32,
    pub tableau_to_foundation: i32,
    pub foundation_to_tableau: i32,
    /// Bonus for exposing a face-down tableau card.
    pub turn_over_tableau_card: i32,
    /// Penalty for moving the waste back to the stock.
    pub recycle_waste: i32,
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            waste_to_tableau: 5,
            waste_to_foundation: 10,
            tableau_to_foundation: 10,
            foundation_to_tableau: -15,
            turn_over_tableau_card: 5,
            recycle_waste: -100,
        }
    }
}

impl PointsTable {
    /// Delta for moving cards from a `from` pile to a `to` pile.
    ///
    /// Zero for any pair not in the table (tableau to tableau, for example).
    #[must_use]
    pub fn move_delta(&self, from: PileType, to: PileType) -> i32 {
        match (from, to) {
            (PileType::Waste, PileType::Tableau) => self.waste_to_tableau,
            (PileType::Waste, PileType::Foundation) => self.waste_to_foundation,
            (PileType::Tableau, PileType::Foundation) => self.tableau_to_foundation,
            (PileType::Foundation, PileType::Tableau) => self.foundation_to_tableau,
            _ => 0,
        }
    }
}
