//! Piles: ordered card sequences with placement rules and layout math.
//!
//! A `Pile` owns the sequence of `CardId`s it holds (index 0 = bottom,
//! last = top). Its type decides which cards it accepts; its arrangement
//! decides where those cards are drawn and how deep the visible part is.
//!
//! Pile methods here are pure. Operations that move cards between piles
//! live on `Board`, which owns both the piles and the card arena.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::PILE_COUNT;
use super::card::{Card, CardId, Rank};
use super::position::Position;

/// A contiguous slice of a pile, bottom to top.
///
/// A face-up tableau run is at most 13 cards, so runs rarely spill.
pub type Run = SmallVec<[CardId; 13]>;

/// Depth offset between consecutive cards (towards the viewer).
pub const OFFSET_DEPTH: f32 = 0.005;
/// Waterfall step below a face-up card.
pub const OFFSET_VERT_FACE_UP: f32 = 0.5;
/// Waterfall step below a face-down card.
pub const OFFSET_VERT_FACE_DOWN: f32 = 0.2;
/// Fan step between the three visible waste cards.
pub const OFFSET_HORIZONTAL: f32 = 0.3;

/// Pile identifier: index into the board's pile arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PileId(pub u8);

impl PileId {
    /// Create a pile ID from a raw index.
    ///
    /// Panics if `id` is not below `PILE_COUNT`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PILE_COUNT, "Pile id out of range");
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// What a pile is for. Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileType {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

/// Layout policy for a pile's cards. Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arrangement {
    /// Cards directly overlaid.
    Stack,
    /// Cards cascade downwards.
    Waterfall,
    /// The last three cards fan out to the right.
    TopThree,
}

impl Arrangement {
    /// Depth from the top at which a card is hidden and made inert.
    ///
    /// `Some(3)` for `Stack` (only the top two are ever seen), `Some(7)` for
    /// `TopThree`, `None` for `Waterfall` where every card stays visible.
    #[must_use]
    pub const fn hidden_depth(self) -> Option<usize> {
        match self {
            Arrangement::Stack => Some(3),
            Arrangement::TopThree => Some(7),
            Arrangement::Waterfall => None,
        }
    }
}

/// An ordered sequence of cards with a fixed type and arrangement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    kind: PileType,
    arrangement: Arrangement,
    origin: Position,
    pub(crate) cards: Vec<CardId>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(id: PileId, kind: PileType, arrangement: Arrangement, origin: Position) -> Self {
        Self {
            id,
            kind,
            arrangement,
            origin,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PileType {
        self.kind
    }

    #[must_use]
    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    #[must_use]
    pub fn origin(&self) -> Position {
        self.origin
    }

    pub(crate) fn set_origin(&mut self, origin: Position) {
        self.origin = origin;
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    #[must_use]
    pub fn is_stock(&self) -> bool {
        self.kind == PileType::Stock
    }

    #[must_use]
    pub fn is_waste(&self) -> bool {
        self.kind == PileType::Waste
    }

    #[must_use]
    pub fn is_foundation(&self) -> bool {
        self.kind == PileType::Foundation
    }

    #[must_use]
    pub fn is_tableau(&self) -> bool {
        self.kind == PileType::Tableau
    }

    /// Top card (last in the sequence).
    #[must_use]
    pub fn top_card(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Bottom card (first in the sequence).
    #[must_use]
    pub fn bottom_card(&self) -> Option<CardId> {
        self.cards.first().copied()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn index_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// The card and everything above it, bottom to top.
    ///
    /// Empty if the card is not in this pile.
    #[must_use]
    pub fn split_at(&self, card: CardId) -> Run {
        match self.index_of(card) {
            Some(index) => Run::from_slice(&self.cards[index..]),
            None => Run::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    /// Placement rule.
    ///
    /// `top` is this pile's current top card, `card_on_top` whether `card`
    /// is the top card of the pile it currently sits in (a loose card
    /// counts as on top).
    ///
    /// - Stock, Waste: never accept a drop.
    /// - Foundation: an Ace on empty, else the next rank of the same suit,
    ///   and only a single card.
    /// - Tableau: a King on empty, else one rank lower in the other color
    ///   group.
    #[must_use]
    pub fn accepts(&self, top: Option<&Card>, card: &Card, card_on_top: bool) -> bool {
        match self.kind {
            PileType::Stock | PileType::Waste => false,
            PileType::Foundation => match top {
                None => card.rank() == Rank::Ace,
                Some(top) => {
                    top.suit() == card.suit()
                        && top.rank().value() + 1 == card.rank().value()
                        && card_on_top
                }
            },
            PileType::Tableau => match top {
                None => card.rank() == Rank::King,
                Some(top) => {
                    top.rank().value() == card.rank().value() + 1
                        && top.color_group() != card.color_group()
                }
            },
        }
    }

    /// Layout position of the card at `index` in a pile of `count` cards.
    ///
    /// `prev` is the card directly below (index - 1), used by `Waterfall`
    /// to accumulate the vertical offset.
    #[must_use]
    pub fn calculate_card_position(&self, index: usize, count: usize, prev: Option<&Card>) -> Position {
        let depth = -OFFSET_DEPTH * (index + 1) as f32;

        match self.arrangement {
            Arrangement::Stack => self.origin.offset(0.0, 0.0, depth),

            Arrangement::Waterfall => {
                let vertical = match prev {
                    Some(prev) => {
                        let step = if prev.is_face_up() {
                            OFFSET_VERT_FACE_UP
                        } else {
                            OFFSET_VERT_FACE_DOWN
                        };
                        (prev.position().y - self.origin.y).abs() + step
                    }
                    None => 0.0,
                };
                self.origin.offset(0.0, -vertical, depth)
            }

            Arrangement::TopThree => {
                let slot = if count > 3 {
                    3 - 3.min(count - index)
                } else {
                    index
                };
                self.origin.offset(slot as f32 * OFFSET_HORIZONTAL, 0.0, depth)
            }
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.kind)
    }
}
