//! The game orchestrator.

use std::collections::VecDeque;

use anyhow::{Context, Result};
use log::{debug, trace, warn};

use super::deal::{deal_plan, DealStep};
use super::outcome::{ActionOutcome, InvalidAction};
use super::state::GameState;
use crate::commands::{
    Command, CommandContext, DrawCardCommand, MoveCardCommand, RefillStockCommand, UndoStack,
};
use crate::core::{
    Board, CardId, DrawMode, GameConfig, GameRng, GameRngState, PileId, Position, TABLEAU_COUNT,
};
use crate::events::GameEvent;
use crate::hints::{Hint, HintEngine};
use crate::records::{Clock, Leaderboard, MemoryStorage, ScoreRecord, Storage, SystemClock};
use crate::scoring::{MoveCounter, Points};

/// Multi-step work pending between `advance` calls.
#[derive(Clone, Debug, Default, PartialEq)]
enum Sequence {
    #[default]
    Idle,
    Dealing(VecDeque<DealStep>),
    /// Win auto-resolve; `cursor` is the tableau index to scan first.
    AutoResolving { cursor: usize },
}

/// A Klondike match: board, rules, history, scoring and state machine.
///
/// Player intents (`draw_card`, `move_card`, `undo`, ...) run synchronously
/// and return an `ActionOutcome`. Deal and win auto-resolve are stepped: the
/// caller paces them with `advance` (or finishes them with
/// `run_until_idle`). Notifications accumulate until `drain_events`.
pub struct Game {
    config: GameConfig,
    board: Board,
    deck: Vec<CardId>,
    deck_shuffled: bool,
    rng: GameRng,
    history: UndoStack,
    points: Points,
    moves: MoveCounter,
    state: GameState,
    sequence: Sequence,
    /// A dealt match is in progress (used by `continue_game`).
    has_started: bool,
    restart_needed: bool,
    leaderboard: Leaderboard,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    hints: HintEngine,
}

impl Game {
    /// Create a game at `Home` with in-memory storage and the system clock.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        GameBuilder::new(config).build()
    }

    /// Start configuring a game.
    #[must_use]
    pub fn builder(config: GameConfig) -> GameBuilder {
        GameBuilder::new(config)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn points(&self) -> i32 {
        self.points.value()
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves.value()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Deck order of the current match, bottom of the stock first.
    #[must_use]
    pub fn deck(&self) -> &[CardId] {
        &self.deck
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    /// A dealt match is waiting to be continued or played.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.has_started
    }

    /// An option changed mid-match; a restart applies it cleanly.
    #[must_use]
    pub fn restart_needed(&self) -> bool {
        self.restart_needed
    }

    /// No deal or auto-resolve step is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.sequence == Sequence::Idle
    }

    /// Remove and return all pending notifications.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.board.drain_events()
    }

    // === Options ===

    /// Change the draw mode. Applies from the next draw or refill.
    ///
    /// Returns whether a restart is recommended (a match is under way).
    pub fn set_draw_mode(&mut self, draw_mode: DrawMode) -> bool {
        if self.config.draw_mode != draw_mode {
            self.config.draw_mode = draw_mode;
            if self.has_started {
                self.restart_needed = true;
            }
            debug!("draw mode set to {:?}", draw_mode);
        }
        self.restart_needed
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.config.audio_enabled = enabled;
    }

    /// Stop (or resume) buffering events, for callers that never drain them.
    pub fn set_events_enabled(&mut self, enabled: bool) {
        self.board.events_mut().set_enabled(enabled);
    }

    // === Presentation hooks ===

    /// Lift a card above the others while it is dragged.
    pub fn begin_drag(&mut self, card: CardId, order: i32) {
        self.board.begin_drag(card, order);
    }

    /// Drop a dragged card back into its pile order.
    pub fn end_drag(&mut self, card: CardId) -> bool {
        self.board.end_drag(card)
    }

    /// Move a pile, re-laying out its cards.
    pub fn set_pile_origin(&mut self, pile: PileId, origin: Position) {
        self.board.set_pile_origin(pile, origin);
    }

    // === Match lifecycle ===

    /// Shuffle a fresh deck and start dealing.
    pub fn new_match(&mut self) -> ActionOutcome {
        if !self.state.can_transition_to(GameState::Dealing) {
            return ActionOutcome::Ignored;
        }
        self.deck = CardId::all().collect();
        self.rng.shuffle(&mut self.deck);
        self.deck_shuffled = true;
        self.start_deal();
        ActionOutcome::Applied
    }

    /// Deal the current deck order again.
    pub fn restart(&mut self) -> ActionOutcome {
        if !self.deck_shuffled {
            return self.new_match();
        }
        if !self.state.can_transition_to(GameState::Dealing) {
            return ActionOutcome::Ignored;
        }
        self.start_deal();
        ActionOutcome::Applied
    }

    pub fn pause(&mut self) -> ActionOutcome {
        self.try_transition(GameState::Paused)
    }

    pub fn continue_from_pause(&mut self) -> ActionOutcome {
        if self.state != GameState::Paused {
            return ActionOutcome::Ignored;
        }
        self.try_transition(GameState::Playing)
    }

    /// From `Home`: resume the match in progress, or start a new one.
    pub fn continue_game(&mut self) -> ActionOutcome {
        if self.state != GameState::Home {
            return ActionOutcome::Ignored;
        }
        if self.has_started {
            self.transition(GameState::Playing);
            ActionOutcome::Applied
        } else {
            self.new_match()
        }
    }

    /// Back to `Home`, cancelling any pending auto-resolve.
    pub fn go_home(&mut self) -> ActionOutcome {
        if !self.state.can_transition_to(GameState::Home) {
            return ActionOutcome::Ignored;
        }
        self.sequence = Sequence::Idle;
        self.transition(GameState::Home);
        ActionOutcome::Applied
    }

    // === Stepped sequences ===

    /// Apply one pending deal or auto-resolve step.
    ///
    /// Returns `false` when nothing was pending.
    pub fn advance(&mut self) -> bool {
        match std::mem::take(&mut self.sequence) {
            Sequence::Idle => false,
            Sequence::Dealing(mut steps) => {
                if let Some(step) = steps.pop_front() {
                    self.apply_deal_step(step);
                }
                if steps.is_empty() {
                    debug!("deal finished");
                    self.transition(GameState::Playing);
                } else {
                    self.sequence = Sequence::Dealing(steps);
                }
                true
            }
            Sequence::AutoResolving { cursor } => self.auto_resolve_step(cursor),
        }
    }

    /// Apply every pending step. Returns how many were applied.
    pub fn run_until_idle(&mut self) -> usize {
        let mut steps = 0;
        while self.advance() {
            steps += 1;
        }
        steps
    }

    // === Player intents ===

    /// Draw from the stock, or recycle the waste when the stock is empty.
    pub fn draw_card(&mut self) -> ActionOutcome {
        if !self.state.accepts_moves() {
            return ActionOutcome::Ignored;
        }
        self.board.restore_drag_orders();

        if self.board.stock().has_cards() {
            let count = self.config.draw_mode.count();
            self.execute(Box::new(DrawCardCommand::new(Board::STOCK, Board::WASTE, count)));
            ActionOutcome::Applied
        } else if self.board.waste().has_cards() {
            self.execute_refill();
            ActionOutcome::Applied
        } else {
            ActionOutcome::Ignored
        }
    }

    /// Recycle the waste onto an empty stock.
    pub fn refill_stock(&mut self) -> ActionOutcome {
        if !self.state.accepts_moves() {
            return ActionOutcome::Ignored;
        }
        self.board.restore_drag_orders();

        if self.board.stock().has_cards() {
            return self.reject(InvalidAction::StockNotEmpty);
        }
        if self.board.waste().is_empty() {
            return ActionOutcome::Ignored;
        }
        self.execute_refill();
        ActionOutcome::Applied
    }

    /// Move `card` (with the cards above it) to `target`, or to the first
    /// accepting pile when `target` is `None`.
    ///
    /// Tapping the stock's face-down top card draws instead.
    pub fn move_card(&mut self, card: CardId, target: Option<PileId>) -> ActionOutcome {
        if !self.state.accepts_moves() {
            return ActionOutcome::Ignored;
        }
        self.board.restore_drag_orders();

        let Some(source) = self.board.card(card).pile() else {
            return ActionOutcome::Ignored;
        };
        if self.board.is_drawable(card) {
            return self.draw_card();
        }
        if !self.board.is_moveable(card) {
            return self.reject(InvalidAction::CardNotMoveable { card });
        }

        let target = match target.or_else(|| self.board.find_valid_pile(card)) {
            Some(target) => target,
            None => return self.reject(InvalidAction::NoValidDestination { card }),
        };
        if target == source || !self.board.can_add_card(target, card) {
            return self.reject(InvalidAction::IllegalMove { card, target });
        }

        let table = self.config.points;
        self.execute(Box::new(MoveCardCommand::new(card, source, target, table)));
        ActionOutcome::Applied
    }

    /// Undo the last command. Counts as a move.
    pub fn undo(&mut self) -> ActionOutcome {
        if !self.state.accepts_moves() {
            return ActionOutcome::Ignored;
        }
        self.board.restore_drag_orders();

        let before = self.points.value();
        let undone = self
            .history
            .undo(&mut CommandContext::new(&mut self.board, &mut self.points));
        if !undone {
            return ActionOutcome::Ignored;
        }

        self.moves.increment();
        self.publish_counters(before);
        self.check_win();
        ActionOutcome::Applied
    }

    /// Compute a hint and publish it.
    pub fn request_hint(&mut self) -> Option<Hint> {
        if !self.state.accepts_moves() {
            return None;
        }
        self.board.restore_drag_orders();

        let hint = self.hints.get_hint(&self.board);
        trace!("hint: {:?}", hint);
        self.board.events_mut().push(GameEvent::Hint(hint));
        hint
    }

    // === Internal ===

    fn execute_refill(&mut self) {
        let penalty = self.config.recycle_penalty();
        self.execute(Box::new(RefillStockCommand::new(Board::STOCK, Board::WASTE, penalty)));
    }

    /// Run a command, record it and re-check the win condition.
    fn execute(&mut self, mut command: Box<dyn Command>) {
        let before = self.points.value();
        command.execute(&mut CommandContext::new(&mut self.board, &mut self.points));
        self.history.push(command);
        self.moves.increment();
        self.publish_counters(before);
        self.check_win();
    }

    fn publish_counters(&mut self, points_before: i32) {
        let events = self.board.events_mut();
        if self.points.value() != points_before {
            events.push(GameEvent::PointsChanged(self.points.value()));
        }
        events.push(GameEvent::MovesChanged(self.moves.value()));
        events.push(GameEvent::UndoAvailable(self.history.can_undo()));
    }

    fn reject(&mut self, reason: InvalidAction) -> ActionOutcome {
        debug!("invalid action: {}", reason);
        self.board.events_mut().push(GameEvent::InvalidAction(reason));
        ActionOutcome::Invalid(reason)
    }

    fn check_win(&mut self) {
        if self.state != GameState::Playing || !self.board.is_win_condition_met() {
            return;
        }
        debug!("win condition met, auto-resolving {} cards", self.board.tableau_card_count());
        self.has_started = false;
        self.transition(GameState::Win);
        self.sequence = Sequence::AutoResolving { cursor: 0 };
    }

    fn start_deal(&mut self) {
        self.sequence = Sequence::Idle;
        self.board.restore_drag_orders();
        self.board.reset();
        self.history.reset();
        self.points.reset();
        self.moves.reset();

        let events = self.board.events_mut();
        events.push(GameEvent::PointsChanged(0));
        events.push(GameEvent::MovesChanged(0));
        events.push(GameEvent::UndoAvailable(false));

        self.has_started = true;
        self.restart_needed = false;
        self.transition(GameState::Dealing);
        self.sequence = Sequence::Dealing(deal_plan());
        debug!("dealing (seed {})", self.rng.seed());
    }

    fn apply_deal_step(&mut self, step: DealStep) {
        match step {
            DealStep::FillStock => {
                self.board.add_cards(Board::STOCK, &self.deck);
            }
            DealStep::Tableau { pile, face_up } => {
                let Some(card) = self.board.stock().top_card() else {
                    warn!("deal ran out of stock before {}", pile);
                    return;
                };
                self.board.add_card(pile, card);
                if face_up {
                    self.board.flip(card);
                }
            }
        }
    }

    /// Move one tableau top card to a foundation, scanning round-robin from
    /// `cursor`. Records the win once the tableaus are empty.
    fn auto_resolve_step(&mut self, cursor: usize) -> bool {
        if self.board.tableau_card_count() == 0 {
            self.finish_win();
            return true;
        }

        for offset in 0..TABLEAU_COUNT {
            let index = (cursor + offset) % TABLEAU_COUNT;
            let pile = Board::tableau_id(index);
            let Some(card) = self.board.pile(pile).top_card() else {
                continue;
            };
            let Some(target) = self.board.check_piles_for_move(card, Board::foundation_ids()) else {
                continue;
            };

            let table = self.config.points;
            self.execute(Box::new(MoveCardCommand::new(card, pile, target, table)));
            trace!("auto-resolve: {} -> {}", card, target);

            if self.board.tableau_card_count() == 0 {
                self.finish_win();
            } else {
                self.sequence = Sequence::AutoResolving {
                    cursor: (index + 1) % TABLEAU_COUNT,
                };
            }
            return true;
        }

        warn!(
            "auto-resolve stalled with {} tableau cards left",
            self.board.tableau_card_count()
        );
        false
    }

    fn finish_win(&mut self) {
        let points = self.points.value();
        self.leaderboard
            .add(ScoreRecord::new(points, self.clock.timestamp()));
        if let Err(err) = self.leaderboard.save(&mut *self.storage) {
            warn!("{:#}", err);
        }
        debug!("match won with {} points", points);
        self.board.events_mut().push(GameEvent::Won { points });
    }

    fn try_transition(&mut self, to: GameState) -> ActionOutcome {
        if self.state.can_transition_to(to) {
            self.transition(to);
            ActionOutcome::Applied
        } else {
            ActionOutcome::Ignored
        }
    }

    /// Panics on a transition the state machine does not allow.
    fn transition(&mut self, to: GameState) {
        let from = self.state;
        assert!(
            from.can_transition_to(to),
            "Invalid state transition {} -> {}",
            from,
            to
        );
        self.state = to;
        debug!("state {} -> {}", from, to);
        self.board
            .events_mut()
            .push(GameEvent::StateChanged { from, to });
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("points", &self.points.value())
            .field("moves", &self.moves.value())
            .field("history", &self.history.len())
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

/// Builder for `Game`.
///
/// ```
/// use solitaire_engine::{Game, GameConfig, GameState};
/// use solitaire_engine::records::{FixedClock, MemoryStorage};
///
/// let mut game = Game::builder(GameConfig::new().with_seed(7))
///     .with_storage(MemoryStorage::new())
///     .with_clock(FixedClock::new("0001"))
///     .build();
///
/// game.new_match();
/// game.run_until_idle();
/// assert_eq!(game.state(), GameState::Playing);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    rng_state: Option<GameRngState>,
}

impl GameBuilder {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            storage: Box::new(MemoryStorage::new()),
            clock: Box::new(SystemClock),
            rng_state: None,
        }
    }

    /// Persist the leaderboard here. Records already stored are loaded.
    #[must_use]
    pub fn with_storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Box::new(storage);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Continue the shuffle stream captured by `Game::rng_state`.
    ///
    /// Takes precedence over `GameConfig::seed`.
    #[must_use]
    pub fn with_rng_state(mut self, state: GameRngState) -> Self {
        self.rng_state = Some(state);
        self
    }

    /// A game at `Home` with an empty board.
    #[must_use]
    pub fn build(self) -> Game {
        let board = Board::new(&self.config.layout);
        self.assemble(board, GameState::Home)
    }

    /// A game in `Playing` on an existing board.
    ///
    /// Fails if the board breaks a structural invariant.
    pub fn resume(self, board: Board) -> Result<Game> {
        board
            .check_invariants()
            .context("Cannot resume from an inconsistent board")?;

        let mut game = self.assemble(board, GameState::Playing);
        game.has_started = true;
        game.check_win();
        Ok(game)
    }

    fn assemble(self, board: Board, state: GameState) -> Game {
        let rng = match (&self.rng_state, self.config.seed) {
            (Some(state), _) => GameRng::from_state(state),
            (None, Some(seed)) => GameRng::new(seed),
            (None, None) => GameRng::from_entropy(),
        };

        let mut leaderboard = Leaderboard::new();
        leaderboard.load(&*self.storage);

        Game {
            config: self.config,
            board,
            deck: CardId::all().collect(),
            deck_shuffled: false,
            rng,
            history: UndoStack::new(),
            points: Points::new(),
            moves: MoveCounter::new(),
            state,
            sequence: Sequence::Idle,
            has_started: false,
            restart_needed: false,
            leaderboard,
            storage: self.storage,
            clock: self.clock,
            hints: HintEngine::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};
    use crate::records::FixedClock;

    fn seeded() -> Game {
        Game::builder(GameConfig::new().with_seed(42))
            .with_clock(FixedClock::new("0001"))
            .build()
    }

    fn dealt() -> Game {
        let mut game = seeded();
        game.new_match();
        game.run_until_idle();
        game.drain_events();
        game
    }

    #[test]
    fn test_starts_at_home() {
        let game = seeded();

        assert_eq!(game.state(), GameState::Home);
        assert!(game.is_idle());
        assert!(!game.has_started());
        assert_eq!(game.points(), 0);
    }

    #[test]
    fn test_deal_is_stepped() {
        let mut game = seeded();
        game.new_match();

        assert_eq!(game.state(), GameState::Dealing);
        assert!(game.advance()); // FillStock
        assert_eq!(game.board().stock().len(), 52);

        assert!(game.advance());
        assert_eq!(game.board().pile(Board::tableau_id(0)).len(), 1);
        assert_eq!(game.board().stock().len(), 51);

        let rest = game.run_until_idle();
        assert_eq!(rest, 27);
        assert_eq!(game.state(), GameState::Playing);
        assert!(!game.advance());
    }

    #[test]
    fn test_intents_ignored_while_dealing() {
        let mut game = seeded();
        game.new_match();
        game.advance();

        assert_eq!(game.draw_card(), ActionOutcome::Ignored);
        assert_eq!(game.undo(), ActionOutcome::Ignored);
        assert_eq!(game.request_hint(), None);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = dealt();
        let b = dealt();

        assert_eq!(a.deck(), b.deck());
        for (pa, pb) in a.board().piles().iter().zip(b.board().piles()) {
            assert_eq!(pa.cards(), pb.cards());
        }
    }

    #[test]
    fn test_restart_keeps_deck_new_match_reshuffles() {
        let mut game = dealt();
        let deck = game.deck().to_vec();

        game.pause();
        assert_eq!(game.restart(), ActionOutcome::Applied);
        game.run_until_idle();
        assert_eq!(game.deck(), deck.as_slice());

        game.pause();
        game.new_match();
        game.run_until_idle();
        assert_ne!(game.deck(), deck.as_slice());
    }

    #[test]
    fn test_draw_counts_moves() {
        let mut game = dealt();

        assert_eq!(game.draw_card(), ActionOutcome::Applied);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.board().waste().len(), 1);
        assert!(game.can_undo());

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::MovesChanged(1)));
        assert!(events.contains(&GameEvent::UndoAvailable(true)));

        assert_eq!(game.undo(), ActionOutcome::Applied);
        assert_eq!(game.moves(), 2);
        assert!(game.board().waste().is_empty());
        assert!(!game.can_undo());
    }

    #[test]
    fn test_tapping_stock_draws() {
        let mut game = dealt();
        let top = game.board().stock().top_card().unwrap();

        assert_eq!(game.move_card(top, None), ActionOutcome::Applied);
        assert_eq!(game.board().waste().top_card(), Some(top));
    }

    #[test]
    fn test_face_down_card_rejected() {
        let mut game = dealt();
        let hidden = game.board().pile(Board::tableau_id(6)).cards()[0];

        let outcome = game.move_card(hidden, None);

        assert_eq!(
            outcome,
            ActionOutcome::Invalid(InvalidAction::CardNotMoveable { card: hidden })
        );
        assert!(game
            .drain_events()
            .contains(&GameEvent::InvalidAction(InvalidAction::CardNotMoveable { card: hidden })));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_refill_with_stock_rejected() {
        let mut game = dealt();
        assert_eq!(
            game.refill_stock(),
            ActionOutcome::Invalid(InvalidAction::StockNotEmpty)
        );
    }

    #[test]
    fn test_draw_mode_change_requests_restart() {
        let mut game = seeded();
        assert!(!game.set_draw_mode(DrawMode::Three), "no match yet");

        game.set_draw_mode(DrawMode::One);
        game.new_match();
        game.run_until_idle();
        assert!(game.set_draw_mode(DrawMode::Three));
        assert!(game.restart_needed());

        game.draw_card();
        assert_eq!(game.board().waste().len(), 3, "applies to the next draw");

        game.pause();
        game.restart();
        assert!(!game.restart_needed());
    }

    #[test]
    fn test_home_and_continue() {
        let mut game = dealt();
        game.draw_card();

        assert_eq!(game.go_home(), ActionOutcome::Applied);
        assert_eq!(game.state(), GameState::Home);

        assert_eq!(game.continue_game(), ActionOutcome::Applied);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.board().waste().len(), 1, "match resumed, not redealt");
    }

    #[test]
    fn test_continue_without_match_starts_one() {
        let mut game = seeded();

        assert_eq!(game.continue_game(), ActionOutcome::Applied);
        assert_eq!(game.state(), GameState::Dealing);
    }

    #[test]
    fn test_pause_cycle() {
        let mut game = dealt();

        assert_eq!(game.continue_from_pause(), ActionOutcome::Ignored);
        assert_eq!(game.pause(), ActionOutcome::Applied);
        assert_eq!(game.draw_card(), ActionOutcome::Ignored);
        assert_eq!(game.continue_from_pause(), ActionOutcome::Applied);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_new_match_ignored_while_playing() {
        let mut game = dealt();
        assert_eq!(game.new_match(), ActionOutcome::Ignored);
    }

    #[test]
    fn test_drag_restored_before_move() {
        let mut game = dealt();
        let card = game.board().pile(Board::tableau_id(3)).top_card().unwrap();

        game.begin_drag(card, 500);
        game.request_hint();

        assert_eq!(game.board().card(card).order(), 3);
        assert!(!game.board().card(card).is_dragged());
    }

    #[test]
    fn test_resume_rejects_inconsistent_board() {
        let mut board = Board::default();
        board.add_card(Board::STOCK, CardId::of(Suit::Spade, Rank::Ace));

        let err = Game::builder(GameConfig::new()).resume(board).unwrap_err();
        assert!(err.to_string().contains("inconsistent board"));
    }

    #[test]
    fn test_rng_state_replays_next_shuffle() {
        let mut game = dealt();
        let state = game.rng_state();

        let mut replay = Game::builder(GameConfig::new())
            .with_rng_state(state)
            .build();
        replay.new_match();

        game.pause();
        game.new_match();
        assert_eq!(game.deck(), replay.deck());
    }

    #[test]
    fn test_events_disabled_for_headless_play() {
        let mut game = seeded();
        game.set_events_enabled(false);
        game.new_match();
        game.run_until_idle();
        game.draw_card();

        assert!(game.drain_events().is_empty());
        assert_eq!(game.moves(), 1);

        game.set_events_enabled(true);
        game.undo();
        assert!(game.drain_events().contains(&GameEvent::MovesChanged(2)));
    }
}
