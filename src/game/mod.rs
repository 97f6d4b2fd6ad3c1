//! Match orchestration.
//!
//! ## Key Types
//!
//! - `Game`: owns the board, undo history, score and state machine
//! - `GameBuilder`: wires in storage and clock
//! - `GameState`: Home, Dealing, Playing, Paused, Win
//! - `ActionOutcome` / `InvalidAction`: results of player intents
//! - `DealStep`: one placement of the stepped deal
//!
//! ## Stepped sequences
//!
//! The deal and the win auto-resolve are sequences of atomic steps. Each
//! `Game::advance` applies exactly one, so a presentation layer can animate
//! between them. Starting a new match, restarting or going home drops any
//! steps still pending.

mod deal;
mod orchestrator;
mod outcome;
mod state;

pub use deal::{deal_plan, DealStep, DEALT_CARDS};
pub use orchestrator::{Game, GameBuilder};
pub use outcome::{ActionOutcome, InvalidAction};
pub use state::GameState;
