//! The board: card arena, pile arena and every placement mutation.
//!
//! `Board` owns all 52 cards and all 13 piles. Cards are addressed by
//! `CardId`, piles by `PileId`. A pile's `cards` sequence is the single
//! ownership record; `Card::pile` mirrors it and is kept in sync here.
//!
//! ## Pile layout
//!
//! | ids    | pile        | arrangement |
//! |--------|-------------|-------------|
//! | 0      | stock       | Stack       |
//! | 1      | waste       | TopThree    |
//! | 2..6   | foundations | Stack       |
//! | 6..13  | tableaus    | Waterfall   |
//!
//! Every mutation publishes `GameEvent`s into the board's `EventQueue`.

use anyhow::{bail, ensure};
use rustc_hash::FxHashSet;

use super::card::{Card, CardId, DragState};
use super::config::BoardLayout;
use super::pile::{Arrangement, Pile, PileId, PileType};
use super::position::Position;
use crate::events::{CardChange, EventQueue, GameEvent};

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;
/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;
/// Total number of piles on a board.
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT + TABLEAU_COUNT;

const FIRST_FOUNDATION: usize = 2;
const FIRST_TABLEAU: usize = FIRST_FOUNDATION + FOUNDATION_COUNT;

/// All cards and piles of one table.
#[derive(Clone, Debug)]
pub struct Board {
    cards: Vec<Card>,
    piles: Vec<Pile>,
    events: EventQueue,
}

impl Board {
    /// The stock pile id.
    pub const STOCK: PileId = PileId(0);
    /// The waste pile id.
    pub const WASTE: PileId = PileId(1);

    /// Create a board with empty piles at the given origins and all 52 cards
    /// unplaced at the stock origin.
    #[must_use]
    pub fn new(layout: &BoardLayout) -> Self {
        let cards = CardId::all()
            .map(|id| {
                let mut card = Card::new(id.suit(), id.rank());
                card.reset(layout.stock);
                card
            })
            .collect();

        let mut piles = Vec::with_capacity(PILE_COUNT);
        piles.push(Pile::new(Self::STOCK, PileType::Stock, Arrangement::Stack, layout.stock));
        piles.push(Pile::new(Self::WASTE, PileType::Waste, Arrangement::TopThree, layout.waste));
        for (i, origin) in layout.foundations.iter().enumerate() {
            let id = PileId::new((FIRST_FOUNDATION + i) as u8);
            piles.push(Pile::new(id, PileType::Foundation, Arrangement::Stack, *origin));
        }
        for (i, origin) in layout.tableaus.iter().enumerate() {
            let id = PileId::new((FIRST_TABLEAU + i) as u8);
            piles.push(Pile::new(id, PileType::Tableau, Arrangement::Waterfall, *origin));
        }

        Self {
            cards,
            piles,
            events: EventQueue::new(),
        }
    }

    // === Lookup ===

    /// Panics if `id` is not a card of this board.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    /// Panics if `id` is not a pile of this board.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// All cards in arena order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All piles in id order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        self.pile(Self::STOCK)
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        self.pile(Self::WASTE)
    }

    /// Foundation piles in id order.
    pub fn foundations(&self) -> impl Iterator<Item = &Pile> {
        self.piles[FIRST_FOUNDATION..FIRST_TABLEAU].iter()
    }

    /// Tableau piles in id order.
    pub fn tableaus(&self) -> impl Iterator<Item = &Pile> {
        self.piles[FIRST_TABLEAU..].iter()
    }

    /// Foundation pile ids in id order.
    pub fn foundation_ids() -> impl Iterator<Item = PileId> {
        (FIRST_FOUNDATION..FIRST_TABLEAU).map(|i| PileId::new(i as u8))
    }

    /// Tableau pile ids in id order.
    pub fn tableau_ids() -> impl Iterator<Item = PileId> {
        (FIRST_TABLEAU..PILE_COUNT).map(|i| PileId::new(i as u8))
    }

    /// The `index`-th tableau (0..7).
    #[must_use]
    pub fn tableau_id(index: usize) -> PileId {
        assert!(index < TABLEAU_COUNT, "Tableau index out of range");
        PileId::new((FIRST_TABLEAU + index) as u8)
    }

    /// The `index`-th foundation (0..4).
    #[must_use]
    pub fn foundation_id(index: usize) -> PileId {
        assert!(index < FOUNDATION_COUNT, "Foundation index out of range");
        PileId::new((FIRST_FOUNDATION + index) as u8)
    }

    /// Top card of a pile.
    #[must_use]
    pub fn top_card(&self, pile: PileId) -> Option<&Card> {
        self.pile(pile).top_card().map(|id| self.card(id))
    }

    /// Whether the card is the top of its pile. A card outside any pile
    /// counts as on top.
    #[must_use]
    pub fn is_on_top(&self, card: CardId) -> bool {
        match self.card(card).pile {
            Some(pile) => self.pile(pile).top_card() == Some(card),
            None => true,
        }
    }

    /// Face-up, and the top card if it sits on the waste or a foundation.
    #[must_use]
    pub fn is_moveable(&self, card: CardId) -> bool {
        let c = self.card(card);
        if !c.face_up {
            return false;
        }
        match c.pile.map(|pile| self.pile(pile).kind()) {
            Some(PileType::Waste | PileType::Foundation) => self.is_on_top(card),
            _ => true,
        }
    }

    /// Face-down top card of the stock.
    #[must_use]
    pub fn is_drawable(&self, card: CardId) -> bool {
        let c = self.card(card);
        !c.face_up && c.pile == Some(Self::STOCK) && self.is_on_top(card)
    }

    /// Pure placement check for `card` onto `pile`.
    ///
    /// Ids built directly from an out-of-range raw value are never accepted.
    #[must_use]
    pub fn can_add_card(&self, pile: PileId, card: CardId) -> bool {
        let Some(target) = self.piles.get(pile.index()) else {
            return false;
        };
        let Some(moving) = self.cards.get(card.index()) else {
            return false;
        };
        let top = target.top_card().map(|id| self.card(id));
        target.accepts(top, moving, self.is_on_top(card))
    }

    /// First pile accepting the card: foundations, then tableaus.
    ///
    /// The card's own pile is never returned.
    #[must_use]
    pub fn find_valid_pile(&self, card: CardId) -> Option<PileId> {
        self.check_piles_for_move(card, Self::foundation_ids())
            .or_else(|| self.check_piles_for_move(card, Self::tableau_ids()))
    }

    /// First pile in `candidates` accepting the card, skipping its own pile.
    #[must_use]
    pub fn check_piles_for_move(
        &self,
        card: CardId,
        candidates: impl IntoIterator<Item = PileId>,
    ) -> Option<PileId> {
        let own = self.card(card).pile;
        candidates
            .into_iter()
            .filter(|&pile| Some(pile) != own)
            .find(|&pile| self.can_add_card(pile, card))
    }

    /// Total cards across all tableaus.
    #[must_use]
    pub fn tableau_card_count(&self) -> usize {
        self.tableaus().map(Pile::len).sum()
    }

    /// Every tableau card face-up, stock and waste empty.
    #[must_use]
    pub fn is_win_condition_met(&self) -> bool {
        self.stock().is_empty()
            && self.waste().is_empty()
            && self
                .tableaus()
                .flat_map(|pile| pile.cards().iter())
                .all(|&id| self.card(id).face_up)
    }

    // === Mutation ===

    /// Append a card to a pile, removing it from its previous pile first.
    pub fn add_card(&mut self, pile: PileId, card: CardId) {
        if let Some(previous) = self.cards[card.index()].pile {
            self.remove_card(previous, card);
        }

        let target = &mut self.piles[pile.index()];
        target.cards.push(card);
        let count = target.len();
        let index = count - 1;
        let arrangement = target.arrangement();

        self.cards[card.index()].drag = None;
        self.set_pile_ref(card, Some(pile));
        self.set_order(card, index as i32);
        self.set_visible(card, true);

        let first = match arrangement {
            Arrangement::TopThree if count > 3 => count - 3,
            _ => index,
        };
        self.relayout(pile, first);

        if let Some(depth) = arrangement.hidden_depth() {
            if count >= depth {
                let hidden = self.piles[pile.index()].cards[count - depth];
                self.set_visible(hidden, false);
            }
        }

        self.emit_pile_changed(pile);
    }

    /// Detach a card from a pile. Returns `false` if it was not there.
    pub fn remove_card(&mut self, pile: PileId, card: CardId) -> bool {
        let source = &mut self.piles[pile.index()];
        let Some(index) = source.index_of(card) else {
            return false;
        };
        source.cards.remove(index);
        let count = source.len();
        let arrangement = source.arrangement();

        self.set_pile_ref(card, None);

        for i in index..count {
            let above = self.piles[pile.index()].cards[i];
            self.set_order(above, i as i32);
        }

        let first = match arrangement {
            Arrangement::TopThree => index.min(count.saturating_sub(3)),
            _ => index,
        };
        self.relayout(pile, first);

        if let Some(depth) = arrangement.hidden_depth() {
            let exposed_depth = depth - 1;
            if count >= exposed_depth {
                let exposed = self.piles[pile.index()].cards[count - exposed_depth];
                self.set_visible(exposed, true);
            }
        }

        self.emit_pile_changed(pile);
        true
    }

    /// Append several cards, preserving their relative order.
    pub fn add_cards(&mut self, pile: PileId, cards: &[CardId]) {
        for &card in cards {
            self.add_card(pile, card);
        }
    }

    /// Detach several cards, top-most first.
    pub fn remove_cards(&mut self, pile: PileId, cards: &[CardId]) {
        for &card in cards.iter().rev() {
            self.remove_card(pile, card);
        }
    }

    /// Toggle a card's face.
    pub fn flip(&mut self, card: CardId) {
        let c = &mut self.cards[card.index()];
        c.flip();
        let face_up = c.face_up;
        self.events.push(GameEvent::card(card, CardChange::FaceUp(face_up)));
    }

    /// Lift a card's render order for a drag.
    ///
    /// The pile order is remembered and written back by `end_drag`. A second
    /// call while dragging only changes the lifted order.
    pub fn begin_drag(&mut self, card: CardId, order: i32) {
        let c = &mut self.cards[card.index()];
        if c.drag.is_none() {
            c.drag = Some(DragState {
                order_to_restore: c.order,
                origin: c.position,
            });
        }
        self.set_order(card, order);
    }

    /// Close a drag window, restoring the pile order and position.
    ///
    /// Returns `false` if the card was not being dragged.
    pub fn end_drag(&mut self, card: CardId) -> bool {
        let Some(drag) = self.cards[card.index()].drag.take() else {
            return false;
        };

        let order = match self.cards[card.index()].pile {
            Some(pile) => self.pile(pile).index_of(card).map_or(drag.order_to_restore, |i| i as i32),
            None => drag.order_to_restore,
        };
        self.set_order(card, order);
        self.set_position(card, drag.origin);
        true
    }

    /// Close every open drag window. Returns how many were closed.
    pub fn restore_drag_orders(&mut self) -> usize {
        let dragged: Vec<CardId> = self
            .cards
            .iter()
            .filter(|c| c.drag.is_some())
            .map(Card::id)
            .collect();

        for &card in &dragged {
            self.end_drag(card);
        }
        dragged.len()
    }

    /// Move a pile and recompute the positions of all its cards.
    pub fn set_pile_origin(&mut self, pile: PileId, origin: Position) {
        self.piles[pile.index()].set_origin(origin);
        self.relayout(pile, 0);
    }

    /// Empty every pile and reset every card to the stock origin.
    pub fn reset(&mut self) {
        let origin = self.stock().origin();
        for pile in &mut self.piles {
            pile.clear();
        }
        for card in &mut self.cards {
            card.reset(origin);
        }
        self.events.push(GameEvent::BoardReset);
    }

    // === Events ===

    /// Pending notifications.
    #[must_use]
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Remove and return all pending notifications.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Invariants ===

    /// Verify the structural invariants of the board.
    ///
    /// - all 52 cards present exactly once across the piles
    /// - each card's pile back-reference matches its pile
    /// - order equals pile index outside a drag window
    /// - foundations hold contiguous single-suit runs from the Ace
    /// - face-up tableau neighbours descend by one in alternating colors
    pub fn check_invariants(&self) -> anyhow::Result<()> {
        let mut seen = FxHashSet::default();

        for pile in &self.piles {
            for (index, &id) in pile.cards().iter().enumerate() {
                ensure!(seen.insert(id), "{} appears twice ({})", id, pile.id());

                let card = self.card(id);
                ensure!(
                    card.pile == Some(pile.id()),
                    "{} is in {} but points at {:?}",
                    id,
                    pile.id(),
                    card.pile
                );
                if card.drag.is_none() {
                    ensure!(
                        card.order == index as i32,
                        "{} has order {} at index {}",
                        id,
                        card.order,
                        index
                    );
                }
            }

            match pile.kind() {
                PileType::Foundation => self.check_foundation(pile)?,
                PileType::Tableau => self.check_tableau(pile)?,
                PileType::Stock | PileType::Waste => {}
            }
        }

        ensure!(
            seen.len() == CardId::COUNT,
            "{} of {} cards are in piles",
            seen.len(),
            CardId::COUNT
        );
        Ok(())
    }

    fn check_foundation(&self, pile: &Pile) -> anyhow::Result<()> {
        let Some(bottom) = pile.bottom_card() else {
            return Ok(());
        };
        let suit = bottom.suit();

        for (index, &id) in pile.cards().iter().enumerate() {
            if id.suit() != suit || id.rank().index() != index {
                bail!("{} breaks the sequence of {} at index {}", id, pile.id(), index);
            }
        }
        Ok(())
    }

    fn check_tableau(&self, pile: &Pile) -> anyhow::Result<()> {
        for pair in pile.cards().windows(2) {
            let (lower, upper) = (self.card(pair[0]), self.card(pair[1]));
            if !lower.face_up || !upper.face_up {
                continue;
            }
            ensure!(
                lower.rank().value() == upper.rank().value() + 1
                    && lower.color_group() != upper.color_group(),
                "{} cannot sit on {} in {}",
                upper,
                lower,
                pile.id()
            );
        }
        Ok(())
    }

    // === Internal ===

    fn relayout(&mut self, pile: PileId, first: usize) {
        let count = self.piles[pile.index()].len();
        for index in first..count {
            let target = &self.piles[pile.index()];
            let prev = index.checked_sub(1).map(|i| &self.cards[target.cards[i].index()]);
            let position = target.calculate_card_position(index, count, prev);
            let card = target.cards[index];
            self.set_position(card, position);
        }
    }

    fn set_pile_ref(&mut self, card: CardId, pile: Option<PileId>) {
        let c = &mut self.cards[card.index()];
        if c.pile != pile {
            c.pile = pile;
            self.events.push(GameEvent::card(card, CardChange::Pile(pile)));
        }
    }

    fn set_order(&mut self, card: CardId, order: i32) {
        let c = &mut self.cards[card.index()];
        if c.order != order {
            c.order = order;
            self.events.push(GameEvent::card(card, CardChange::Order(order)));
        }
    }

    fn set_position(&mut self, card: CardId, position: Position) {
        let c = &mut self.cards[card.index()];
        if c.position != position {
            c.position = position;
            self.events.push(GameEvent::card(card, CardChange::Position(position)));
        }
    }

    /// Visibility and interactability always move together.
    fn set_visible(&mut self, card: CardId, visible: bool) {
        let c = &mut self.cards[card.index()];
        if c.visible != visible {
            c.visible = visible;
            self.events.push(GameEvent::card(card, CardChange::Visible(visible)));
        }
        let c = &mut self.cards[card.index()];
        if c.interactable != visible {
            c.interactable = visible;
            self.events.push(GameEvent::card(card, CardChange::Interactable(visible)));
        }
    }

    fn emit_pile_changed(&mut self, pile: PileId) {
        let len = self.pile(pile).len();
        self.events.push(GameEvent::PileChanged { pile, len });
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&BoardLayout::default())
    }
}
