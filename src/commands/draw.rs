//! Stock to waste draw.

use log::trace;
use smallvec::SmallVec;

use super::{Command, CommandContext, CommandPhase};
use crate::core::{CardId, PileId};

/// Turns up to `count` cards from the stock top onto the waste.
///
/// The drawn cards keep their relative order: the card that was deepest in
/// the stock lands first, so the stock's top card ends up on top of the
/// waste.
#[derive(Debug)]
pub struct DrawCardCommand {
    stock: PileId,
    waste: PileId,
    count: usize,
    drawn: SmallVec<[CardId; 3]>,
    phase: CommandPhase,
}

impl DrawCardCommand {
    const NAME: &'static str = "DrawCard";

    #[must_use]
    pub fn new(stock: PileId, waste: PileId, count: usize) -> Self {
        Self {
            stock,
            waste,
            count,
            drawn: SmallVec::new(),
            phase: CommandPhase::Pending,
        }
    }

    /// Cards moved by `execute`, bottom to top. Empty before execution.
    #[must_use]
    pub fn drawn(&self) -> &[CardId] {
        &self.drawn
    }
}

impl Command for DrawCardCommand {
    fn execute(&mut self, ctx: &mut CommandContext<'_>) {
        self.phase.enter_executed(Self::NAME);

        let stock = ctx.board.pile(self.stock).cards();
        let n = self.count.min(stock.len());
        self.drawn = SmallVec::from_slice(&stock[stock.len() - n..]);

        ctx.board.remove_cards(self.stock, &self.drawn);
        for &card in &self.drawn {
            ctx.board.add_card(self.waste, card);
            ctx.board.flip(card);
        }

        trace!("draw: {} card(s) {} -> {}", n, self.stock, self.waste);
    }

    fn undo(&mut self, ctx: &mut CommandContext<'_>) {
        self.phase.enter_undone(Self::NAME);

        ctx.board.remove_cards(self.waste, &self.drawn);
        for &card in &self.drawn {
            ctx.board.flip(card);
        }
        ctx.board.add_cards(self.stock, &self.drawn);

        trace!("undo draw: {} card(s) back to {}", self.drawn.len(), self.stock);
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn phase(&self) -> CommandPhase {
        self.phase
    }
}
