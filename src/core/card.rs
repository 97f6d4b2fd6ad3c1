//! Card identity and placement state.
//!
//! ## Identity vs Placement
//!
//! A card's identity (`Suit`, `Rank`) is fixed when the card is created and
//! never changes afterwards. Everything else on `Card` is placement state
//! that is rewritten as the card travels between piles:
//! - face-up flag
//! - owning pile (a lookup aid only, the pile's sequence owns the card)
//! - order within the pile
//! - layout position, visibility, interactability
//! - transient drag state
//!
//! ## CardId
//!
//! The 52 cards of a board are stored in an arena indexed by `CardId`.
//! The id is derived from identity, so `CardId::of(suit, rank)` is the same
//! on every board.
//!
//! ```
//! use solitaire_engine::core::{CardId, Rank, Suit};
//!
//! let id = CardId::of(Suit::Heart, Rank::Queen);
//! assert_eq!(id.suit(), Suit::Heart);
//! assert_eq!(id.rank(), Rank::Queen);
//! assert_eq!(CardId::all().count(), 52);
//! ```

use serde::{Deserialize, Serialize};

use super::pile::PileId;
use super::position::Position;

/// Card suit.
///
/// Declaration order matters: `Spade`/`Club` form color group 0 (black),
/// `Heart`/`Diamond` form color group 1 (red).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Club,
    Heart,
    Diamond,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    /// Index in declaration order (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color group: 0 for black suits, 1 for red suits.
    #[must_use]
    pub const fn color_group(self) -> u8 {
        (self as u8) / 2
    }

    /// Check if this is a red suit.
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.color_group() == 1
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Index in declaration order (0..13).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face value: Ace = 1 ... King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Look up a rank by face value (1..=13).
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Arena index of one of the 52 cards.
///
/// Layout: `suit.index() * 13 + rank.index()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Number of cards in a deck.
    pub const COUNT: usize = 52;

    /// Create a card ID from a raw index.
    ///
    /// Panics if `id` is not below 52.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < Self::COUNT, "Card id out of range");
        Self(id)
    }

    /// The card ID for a given identity.
    #[must_use]
    pub const fn of(suit: Suit, rank: Rank) -> Self {
        Self(suit as u8 * 13 + rank as u8)
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

    /// Suit encoded in this id.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / 13) as usize]
    }

    /// Rank encoded in this id.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % 13) as usize]
    }

    /// Iterate over all 52 ids in arena order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..Self::COUNT as u8).map(CardId)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.suit(), self.rank())
    }
}

/// Presentation-level drag window.
///
/// While a card is dragged its `order` is lifted above everything else. The
/// pile order is remembered here and written back by `Board::end_drag`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    /// Order the card had when the drag began.
    pub order_to_restore: i32,
    /// Position the card had when the drag began.
    pub origin: Position,
}

/// A playing card: immutable identity plus mutable placement state.
///
/// Mutation goes through `Board`, which keeps piles and back-references in
/// sync and publishes change events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    pub(crate) face_up: bool,
    pub(crate) pile: Option<PileId>,
    pub(crate) order: i32,
    pub(crate) position: Position,
    pub(crate) visible: bool,
    pub(crate) interactable: bool,
    pub(crate) drag: Option<DragState>,
}

impl Card {
    /// Create a face-down, unplaced card with the given identity.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
            pile: None,
            order: 0,
            position: Position::ZERO,
            visible: true,
            interactable: true,
            drag: None,
        }
    }

    /// Clear all placement state, keeping identity.
    ///
    /// Idempotent.
    pub fn reset(&mut self, origin: Position) {
        self.face_up = false;
        self.pile = None;
        self.order = 0;
        self.position = origin;
        self.visible = true;
        self.interactable = true;
        self.drag = None;
    }

    /// Toggle the face-up flag.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        CardId::of(self.suit, self.rank)
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Color group of the suit (0 black, 1 red).
    #[must_use]
    pub fn color_group(&self) -> u8 {
        self.suit.color_group()
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// The pile currently holding this card, if any.
    #[must_use]
    pub fn pile(&self) -> Option<PileId> {
        self.pile
    }

    #[must_use]
    pub fn is_in_pile(&self) -> bool {
        self.pile.is_some()
    }

    /// Render order. Equals the pile index outside a drag window.
    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Active drag window, if the card is being dragged.
    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn is_dragged(&self) -> bool {
        self.drag.is_some()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_groups() {
        assert_eq!(Suit::Spade.color_group(), 0);
        assert_eq!(Suit::Club.color_group(), 0);
        assert_eq!(Suit::Heart.color_group(), 1);
        assert_eq!(Suit::Diamond.color_group(), 1);
        assert!(Suit::Diamond.is_red());
        assert!(!Suit::Club.is_red());
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(12), Some(Rank::Queen));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_card_id_layout() {
        let ids: Vec<_> = CardId::all().collect();
        assert_eq!(ids.len(), 52);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let id = CardId::of(suit, rank);
                assert_eq!(id.suit(), suit);
                assert_eq!(id.rank(), rank);
                assert_eq!(ids[id.index()], id);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Card id out of range")]
    fn test_card_id_out_of_range() {
        let _ = CardId::new(52);
    }

    #[test]
    fn test_new_card_is_unplaced() {
        let card = Card::new(Suit::Club, Rank::Seven);

        assert_eq!(card.suit(), Suit::Club);
        assert_eq!(card.rank(), Rank::Seven);
        assert_eq!(card.id(), CardId::of(Suit::Club, Rank::Seven));
        assert!(!card.is_face_up());
        assert!(!card.is_in_pile());
        assert!(card.is_visible());
        assert!(card.is_interactable());
    }

    #[test]
    fn test_flip_toggles() {
        let mut card = Card::new(Suit::Heart, Rank::Ace);

        card.flip();
        assert!(card.is_face_up());

        card.flip();
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_reset_keeps_identity() {
        let mut card = Card::new(Suit::Diamond, Rank::Jack);
        card.flip();
        card.pile = Some(PileId::new(3));
        card.order = 5;
        card.visible = false;
        card.interactable = false;
        card.drag = Some(DragState {
            order_to_restore: 5,
            origin: Position::ZERO,
        });

        let origin = Position::new(1.0, 2.0, 0.0);
        card.reset(origin);
        let once = card.clone();
        card.reset(origin);

        assert_eq!(card, once);
        assert_eq!(card.suit(), Suit::Diamond);
        assert_eq!(card.rank(), Rank::Jack);
        assert!(!card.is_face_up());
        assert_eq!(card.pile(), None);
        assert_eq!(card.order(), 0);
        assert_eq!(card.position(), origin);
        assert!(card.is_visible());
        assert!(!card.is_dragged());
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Spade, Rank::Ace);
        assert_eq!(format!("{}", card), "Spade Ace");
        assert_eq!(format!("{}", CardId::of(Suit::Heart, Rank::Ten)), "Heart Ten");
    }

    #[test]
    fn test_serialization() {
        let id = CardId::of(Suit::Club, Rank::Nine);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
