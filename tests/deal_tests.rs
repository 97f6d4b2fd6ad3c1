//! Deal and shuffle integration tests.
//!
//! These tests drive the stepped deal through the public `Game` API and
//! check the resulting layout.

use solitaire_engine::core::TABLEAU_COUNT;
use solitaire_engine::game::DEALT_CARDS;
use solitaire_engine::{ActionOutcome, Board, CardId, Game, GameConfig, GameEvent, GameState};

fn dealt(seed: u64) -> Game {
    let mut game = Game::new(GameConfig::new().with_seed(seed));
    assert_eq!(game.new_match(), ActionOutcome::Applied);
    game.run_until_idle();
    game
}

// =============================================================================
// Layout Tests
// =============================================================================

/// Test that tableau pile `i` receives `i + 1` cards and the rest stay in stock.
#[test]
fn test_deal_sizes() {
    let game = dealt(42);
    let board = game.board();

    let sizes: Vec<usize> = board.tableaus().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(board.stock().len(), 52 - DEALT_CARDS);
    assert_eq!(board.stock().len(), 24);
    assert!(board.waste().is_empty());
    assert!(board.foundations().all(|p| p.is_empty()));
}

/// Test that exactly the last-dealt card of each tableau is face-up.
#[test]
fn test_only_top_card_face_up() {
    for seed in [1, 2, 3, 99] {
        let game = dealt(seed);
        let board = game.board();

        for pile in board.tableaus() {
            let cards = pile.cards();
            let (top, rest) = cards.split_last().unwrap();
            assert!(board.card(*top).is_face_up());
            assert!(rest.iter().all(|&id| !board.card(id).is_face_up()));
        }
        assert!(board
            .stock()
            .cards()
            .iter()
            .all(|&id| !board.card(id).is_face_up()));
    }
}

/// Test that a fresh deal conserves the deck.
#[test]
fn test_deal_conserves_deck() {
    let game = dealt(7);
    game.board().check_invariants().unwrap();

    let mut deck = game.deck().to_vec();
    deck.sort();
    assert_eq!(deck, CardId::all().collect::<Vec<_>>());
}

/// Test that the deal takes cards from the stock top in deck order.
#[test]
fn test_deal_follows_deck_order() {
    let game = dealt(11);
    let board = game.board();
    let deck = game.deck();

    // The first card dealt is the deck's last (the stock's top).
    assert_eq!(board.pile(Board::tableau_id(0)).cards(), &[deck[51]]);
    assert_eq!(
        board.pile(Board::tableau_id(1)).cards(),
        &[deck[50], deck[49]]
    );
    assert_eq!(board.stock().cards(), &deck[..24]);
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Test that the same seed deals the same layout.
#[test]
fn test_seeded_deal_is_reproducible() {
    let a = dealt(1234);
    let b = dealt(1234);

    assert_eq!(a.deck(), b.deck());
    for (pa, pb) in a.board().piles().iter().zip(b.board().piles()) {
        assert_eq!(pa.cards(), pb.cards());
    }
}

/// Test that different seeds deal different decks.
#[test]
fn test_different_seeds_differ() {
    assert_ne!(dealt(1).deck(), dealt(2).deck());
}

// =============================================================================
// Stepping Tests
// =============================================================================

/// Test that each step is atomic and the state changes only at the end.
#[test]
fn test_deal_steps() {
    let mut game = Game::new(GameConfig::new().with_seed(5));
    game.new_match();

    let mut steps = 0;
    while game.state() == GameState::Dealing {
        assert!(game.advance());
        steps += 1;
        if game.state() == GameState::Dealing {
            // Mid-deal the stock only ever shrinks by whole cards.
            let dealt: usize = game.board().tableaus().map(|p| p.len()).sum();
            assert_eq!(dealt + game.board().stock().len(), 52);
        }
    }

    assert_eq!(steps, 1 + DEALT_CARDS);
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(TABLEAU_COUNT, 7);
}

/// Test the events around a deal.
#[test]
fn test_deal_events() {
    let mut game = Game::new(GameConfig::new().with_seed(5));
    game.new_match();
    game.run_until_idle();

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::BoardReset));
    assert!(events.contains(&GameEvent::PointsChanged(0)));
    assert_eq!(
        events.first(),
        Some(&GameEvent::BoardReset),
        "the board is cleared before anything else"
    );
    assert_eq!(
        events.last(),
        Some(&GameEvent::StateChanged {
            from: GameState::Dealing,
            to: GameState::Playing,
        })
    );
}

/// Test that a restart mid-deal drops the pending steps.
#[test]
fn test_restart_cancels_deal() {
    let mut game = Game::new(GameConfig::new().with_seed(5));
    game.new_match();
    for _ in 0..10 {
        game.advance();
    }

    // Dealing cannot be restarted directly; finish, pause, restart.
    assert_eq!(game.restart(), ActionOutcome::Ignored);
    game.run_until_idle();
    game.pause();
    assert_eq!(game.restart(), ActionOutcome::Applied);

    assert_eq!(game.state(), GameState::Dealing);
    assert!(game.board().piles().iter().all(|p| p.is_empty()));
    game.run_until_idle();
    game.board().check_invariants().unwrap();
}
