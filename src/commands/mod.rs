//! Reversible board mutations.
//!
//! Every change a player makes goes through a `Command`. A command mutates
//! the board and the score exactly once in `execute`, and `undo` is its
//! exact inverse: after `execute` then `undo`, every card's pile, order and
//! face, and the score, equal their values before `execute`.
//!
//! ## Key Types
//!
//! - `Command`: the execute/undo contract
//! - `CommandContext`: the mutable state a command works on
//! - `DrawCardCommand`, `MoveCardCommand`, `RefillStockCommand`
//! - `UndoStack`: LIFO history of executed commands
//!
//! ## Misuse
//!
//! Executing a command twice, or undoing one that was never executed, is a
//! programming error and panics.

mod draw;
mod history;
mod move_card;
mod refill;

pub use draw::DrawCardCommand;
pub use history::UndoStack;
pub use move_card::MoveCardCommand;
pub use refill::RefillStockCommand;

use serde::{Deserialize, Serialize};

use crate::core::Board;
use crate::scoring::Points;

/// Mutable state a command operates on.
pub struct CommandContext<'a> {
    pub board: &'a mut Board,
    pub points: &'a mut Points,
}

impl<'a> CommandContext<'a> {
    pub fn new(board: &'a mut Board, points: &'a mut Points) -> Self {
        Self { board, points }
    }
}

/// Where a command is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandPhase {
    /// Built, not yet executed.
    #[default]
    Pending,
    Executed,
    /// Executed then reversed. Terminal: there is no redo.
    Undone,
}

impl CommandPhase {
    /// Pending -> Executed, panicking on any other start.
    pub(crate) fn enter_executed(&mut self, name: &str) {
        assert!(
            *self == CommandPhase::Pending,
            "{} executed twice (phase {:?})",
            name,
            self
        );
        *self = CommandPhase::Executed;
    }

    /// Executed -> Undone, panicking on any other start.
    pub(crate) fn enter_undone(&mut self, name: &str) {
        assert!(
            *self == CommandPhase::Executed,
            "{} undone without a prior execute (phase {:?})",
            name,
            self
        );
        *self = CommandPhase::Undone;
    }
}

/// A reversible unit of game-state mutation.
pub trait Command: std::fmt::Debug {
    /// Apply the mutation. Panics if already executed.
    fn execute(&mut self, ctx: &mut CommandContext<'_>);

    /// Reverse the mutation. Panics unless executed and not yet undone.
    fn undo(&mut self, ctx: &mut CommandContext<'_>);

    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn phase(&self) -> CommandPhase;

    fn is_executed(&self) -> bool {
        self.phase() == CommandPhase::Executed
    }
}
