//! Card and run moves between piles.

use log::trace;
use smallvec::smallvec;

use super::{Command, CommandContext, CommandPhase};
use crate::core::{CardId, PileId, Run};
use crate::scoring::PointsTable;

/// Moves a card, or the run starting at it, from one pile to another.
///
/// Scoring is one transaction: the base delta for the pile pair and the
/// turn-over bonus (when the move exposes a face-down tableau card, which is
/// flipped) are added together and clamped once. Undo reverses exactly the
/// amount that was applied.
#[derive(Debug)]
pub struct MoveCardCommand {
    card: CardId,
    source: PileId,
    target: PileId,
    table: PointsTable,
    moved: Run,
    flipped: Option<CardId>,
    applied: i32,
    phase: CommandPhase,
}

impl MoveCardCommand {
    const NAME: &'static str = "MoveCard";

    #[must_use]
    pub fn new(card: CardId, source: PileId, target: PileId, table: PointsTable) -> Self {
        Self {
            card,
            source,
            target,
            table,
            moved: Run::new(),
            flipped: None,
            applied: 0,
            phase: CommandPhase::Pending,
        }
    }

    #[must_use]
    pub fn card(&self) -> CardId {
        self.card
    }

    #[must_use]
    pub fn source(&self) -> PileId {
        self.source
    }

    #[must_use]
    pub fn target(&self) -> PileId {
        self.target
    }

    /// Cards moved by `execute`, bottom to top.
    #[must_use]
    pub fn moved(&self) -> &[CardId] {
        &self.moved
    }

    /// The source card this move turned face-up, if any.
    #[must_use]
    pub fn flipped(&self) -> Option<CardId> {
        self.flipped
    }

    /// Score change actually applied after clamping.
    #[must_use]
    pub fn applied_points(&self) -> i32 {
        self.applied
    }
}

impl Command for MoveCardCommand {
    /// Panics if the card is not in the source pile.
    fn execute(&mut self, ctx: &mut CommandContext<'_>) {
        self.phase.enter_executed(Self::NAME);

        let source = ctx.board.pile(self.source);
        self.moved = if source.top_card() == Some(self.card) {
            smallvec![self.card]
        } else {
            source.split_at(self.card)
        };
        assert!(
            !self.moved.is_empty(),
            "{} is not in {}",
            self.card,
            self.source
        );

        let source_kind = source.kind();
        let target_kind = ctx.board.pile(self.target).kind();

        ctx.board.remove_cards(self.source, &self.moved);
        ctx.board.add_cards(self.target, &self.moved);

        let mut delta = self.table.move_delta(source_kind, target_kind);
        if ctx.board.pile(self.source).is_tableau() {
            if let Some(exposed) = ctx.board.top_card(self.source).filter(|c| !c.is_face_up()) {
                let exposed = exposed.id();
                ctx.board.flip(exposed);
                self.flipped = Some(exposed);
                delta += self.table.turn_over_tableau_card;
            }
        }
        self.applied = ctx.points.add(delta);

        trace!(
            "move: {} (+{} above) {} -> {}, {:+} points",
            self.card,
            self.moved.len() - 1,
            self.source,
            self.target,
            self.applied
        );
    }

    fn undo(&mut self, ctx: &mut CommandContext<'_>) {
        self.phase.enter_undone(Self::NAME);

        if let Some(flipped) = self.flipped {
            ctx.board.flip(flipped);
        }
        let value = ctx.points.value();
        ctx.points.set(value - self.applied);

        ctx.board.remove_cards(self.target, &self.moved);
        ctx.board.add_cards(self.source, &self.moved);

        trace!("undo move: {} back to {}", self.card, self.source);
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn phase(&self) -> CommandPhase {
        self.phase
    }
}
