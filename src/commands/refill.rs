//! Waste to stock recycle.

use log::trace;

use super::{Command, CommandContext, CommandPhase};
use crate::core::PileId;

/// Turns the whole waste back over onto the stock.
///
/// Cards are taken from the waste top one by one, so the waste's top card
/// becomes the stock's bottom card. Undo restores the score from a snapshot
/// taken before execution rather than reversing the penalty, since the
/// penalty may have been clamped.
#[derive(Debug)]
pub struct RefillStockCommand {
    stock: PileId,
    waste: PileId,
    penalty: i32,
    moved: usize,
    points_before: i32,
    phase: CommandPhase,
}

impl RefillStockCommand {
    const NAME: &'static str = "RefillStock";

    /// `penalty` is applied on execute; pass 0 to recycle for free.
    #[must_use]
    pub fn new(stock: PileId, waste: PileId, penalty: i32) -> Self {
        Self {
            stock,
            waste,
            penalty,
            moved: 0,
            points_before: 0,
            phase: CommandPhase::Pending,
        }
    }

    /// Number of cards recycled by `execute`.
    #[must_use]
    pub fn moved(&self) -> usize {
        self.moved
    }
}

impl Command for RefillStockCommand {
    fn execute(&mut self, ctx: &mut CommandContext<'_>) {
        self.phase.enter_executed(Self::NAME);

        self.points_before = ctx.points.value();
        while let Some(card) = ctx.board.pile(self.waste).top_card() {
            ctx.board.add_card(self.stock, card);
            ctx.board.flip(card);
            self.moved += 1;
        }
        ctx.points.add(self.penalty);

        trace!("refill: {} card(s) {} -> {}", self.moved, self.waste, self.stock);
    }

    fn undo(&mut self, ctx: &mut CommandContext<'_>) {
        self.phase.enter_undone(Self::NAME);

        for _ in 0..self.moved {
            let Some(card) = ctx.board.pile(self.stock).top_card() else {
                break;
            };
            ctx.board.add_card(self.waste, card);
            ctx.board.flip(card);
        }
        ctx.points.set(self.points_before);

        trace!("undo refill: {} card(s) back to {}", self.moved, self.waste);
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn phase(&self) -> CommandPhase {
        self.phase
    }
}
