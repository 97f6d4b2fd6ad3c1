//! # solitaire-engine
//!
//! A Klondike solitaire rules engine: piles and placement rules, reversible
//! commands with undo, a stepped deal, win auto-resolve and greedy hints.
//!
//! ## Design Principles
//!
//! 1. **Arena Ownership**: The board owns every card and pile. Cards and
//!    piles refer to each other by `CardId`/`PileId`; a pile's sequence is
//!    the only ownership record.
//!
//! 2. **Reversible Mutation**: Every player move is a `Command` whose `undo`
//!    restores the board and score exactly.
//!
//! 3. **Presentation Agnostic**: The engine publishes `GameEvent`s and never
//!    renders, animates or plays sound. Long sequences (deal, auto-resolve)
//!    are stepped by the caller.
//!
//! 4. **Deterministic**: Deals come from a seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: Cards, piles, board, RNG, configuration
//! - `events`: Outbound notifications
//! - `scoring`: Points, move counter, delta table
//! - `commands`: Draw, move and refill commands, undo history
//! - `hints`: Greedy hint scanner
//! - `records`: Leaderboard, storage and clock boundaries
//! - `game`: State machine and match orchestration
//!
//! ## Example
//!
//! ```
//! use solitaire_engine::{ActionOutcome, Game, GameConfig, GameState};
//!
//! let mut game = Game::new(GameConfig::new().with_seed(1));
//! game.new_match();
//! game.run_until_idle();
//! assert_eq!(game.state(), GameState::Playing);
//!
//! assert_eq!(game.draw_card(), ActionOutcome::Applied);
//! assert_eq!(game.undo(), ActionOutcome::Applied);
//! assert_eq!(game.moves(), 2);
//! ```

pub mod core;
pub mod events;
pub mod scoring;
pub mod commands;
pub mod hints;
pub mod records;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Arrangement, Board, BoardLayout, Card, CardId, DrawMode, GameConfig, GameRng, GameRngState,
    Pile, PileId, PileType, Position, Rank, Suit,
};

pub use crate::events::{CardChange, EventQueue, GameEvent};

pub use crate::scoring::{MoveCounter, Points, PointsTable};

pub use crate::commands::{
    Command, CommandContext, CommandPhase, DrawCardCommand, MoveCardCommand, RefillStockCommand,
    UndoStack,
};

pub use crate::hints::{Hint, HintEngine};

pub use crate::records::{Clock, Leaderboard, MemoryStorage, ScoreRecord, Storage, SystemClock};

pub use crate::game::{ActionOutcome, DealStep, Game, GameBuilder, GameState, InvalidAction};
