//! Core types: cards, piles, the board arena, RNG, configuration.
//!
//! Everything here is deterministic and free of presentation concerns.
//! Higher layers (`commands`, `game`) mutate the board only through the
//! `Board` methods, which keep piles and card back-references in sync.

pub mod board;
pub mod card;
pub mod config;
pub mod pile;
pub mod position;
pub mod rng;

pub use board::{Board, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
pub use card::{Card, CardId, DragState, Rank, Suit};
pub use config::{BoardLayout, DrawMode, GameConfig};
pub use pile::{Arrangement, Pile, PileId, PileType, Run};
pub use position::Position;
pub use rng::{GameRng, GameRngState};
