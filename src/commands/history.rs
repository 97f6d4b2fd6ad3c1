//! Undo history.

use super::{Command, CommandContext};

/// LIFO history of executed commands.
///
/// There is no redo: an undone command is dropped, and `reset` discards the
/// whole history.
#[derive(Debug, Default)]
pub struct UndoStack {
    commands: Vec<Box<dyn Command>>,
}

impl UndoStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an executed command.
    ///
    /// Panics if the command has not been executed.
    pub fn push(&mut self, command: Box<dyn Command>) {
        assert!(
            command.is_executed(),
            "Only executed commands can be recorded, got {} in {:?}",
            command.name(),
            command.phase()
        );
        self.commands.push(command);
    }

    /// Undo the most recent command. Returns `false` if the history is empty.
    pub fn undo(&mut self, ctx: &mut CommandContext<'_>) -> bool {
        match self.commands.pop() {
            Some(mut command) => {
                command.undo(ctx);
                true
            }
            None => false,
        }
    }

    /// Discard the history.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The most recent command, if any.
    #[must_use]
    pub fn last(&self) -> Option<&dyn Command> {
        self.commands.last().map(|c| c.as_ref())
    }
}
