//! Game configuration types.
//!
//! Callers configure the engine at startup by providing:
//! - `DrawMode`: how many cards a draw turns over (also toggles the recycle
//!   penalty)
//! - `PointsTable`: score deltas
//! - `BoardLayout`: where each pile sits in layout space
//! - `GameConfig`: combines all configuration
//!
//! Options are owned by the caller; the engine reads them when it builds
//! commands, so a change applies from the next command on.

use serde::{Deserialize, Serialize};

use super::board::{FOUNDATION_COUNT, TABLEAU_COUNT};
use super::position::Position;
use crate::scoring::PointsTable;

/// Number of cards turned over per draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    /// Draw one card at a time; recycling the waste costs points.
    #[default]
    One,
    /// Draw three cards at a time; recycling is free.
    Three,
}

impl DrawMode {
    /// Cards per draw.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }

    /// Whether recycling the waste is penalised in this mode.
    #[must_use]
    pub const fn penalises_recycle(self) -> bool {
        matches!(self, DrawMode::One)
    }
}

/// Pile origins in layout space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub stock: Position,
    pub waste: Position,
    pub foundations: [Position; FOUNDATION_COUNT],
    pub tableaus: [Position; TABLEAU_COUNT],
}

impl BoardLayout {
    /// Horizontal distance between pile columns.
    pub const COLUMN_SPACING: f32 = 1.2;
    /// Vertical distance between the top row and the tableau row.
    pub const ROW_SPACING: f32 = 1.6;
}

impl Default for BoardLayout {
    /// Classic layout: stock, waste and foundations on the top row,
    /// seven tableau columns below.
    fn default() -> Self {
        let column = |i: usize| i as f32 * Self::COLUMN_SPACING;

        Self {
            stock: Position::new(column(0), 0.0, 0.0),
            waste: Position::new(column(1), 0.0, 0.0),
            foundations: std::array::from_fn(|i| Position::new(column(i + 3), 0.0, 0.0)),
            tableaus: std::array::from_fn(|i| Position::new(column(i), -Self::ROW_SPACING, 0.0)),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Draw-one or draw-three.
    pub draw_mode: DrawMode,

    /// Audio toggle. Stored for the caller; never affects rules.
    pub audio_enabled: bool,

    /// Score deltas.
    pub points: PointsTable,

    /// Pile origins.
    pub layout: BoardLayout,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::One,
            audio_enabled: true,
            points: PointsTable::default(),
            layout: BoardLayout::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw mode.
    #[must_use]
    pub fn with_draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    /// Shorthand for `with_draw_mode(DrawMode::Three)`.
    #[must_use]
    pub fn draw_three(self) -> Self {
        self.with_draw_mode(DrawMode::Three)
    }

    /// Set the audio toggle.
    #[must_use]
    pub fn with_audio(mut self, enabled: bool) -> Self {
        self.audio_enabled = enabled;
        self
    }

    /// Set the score deltas.
    #[must_use]
    pub fn with_points(mut self, points: PointsTable) -> Self {
        self.points = points;
        self
    }

    /// Set the pile origins.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Fix the shuffle seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Penalty applied by a waste recycle under the current draw mode.
    #[must_use]
    pub fn recycle_penalty(&self) -> i32 {
        if self.draw_mode.penalises_recycle() {
            self.points.recycle_waste
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_mode() {
        assert_eq!(DrawMode::One.count(), 1);
        assert_eq!(DrawMode::Three.count(), 3);
        assert!(DrawMode::One.penalises_recycle());
        assert!(!DrawMode::Three.penalises_recycle());
        assert_eq!(DrawMode::default(), DrawMode::One);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .draw_three()
            .with_audio(false)
            .with_seed(42);

        assert_eq!(config.draw_mode, DrawMode::Three);
        assert!(!config.audio_enabled);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.points, PointsTable::default());
    }

    #[test]
    fn test_recycle_penalty() {
        let one = GameConfig::new();
        let three = GameConfig::new().draw_three();

        assert_eq!(one.recycle_penalty(), -100);
        assert_eq!(three.recycle_penalty(), 0);
    }

    #[test]
    fn test_default_layout_columns() {
        let layout = BoardLayout::default();

        assert_eq!(layout.stock.x, 0.0);
        assert!((layout.waste.x - BoardLayout::COLUMN_SPACING).abs() < 1e-6);
        assert!((layout.foundations[0].x - 3.0 * BoardLayout::COLUMN_SPACING).abs() < 1e-6);
        for (i, tableau) in layout.tableaus.iter().enumerate() {
            assert!((tableau.x - i as f32 * BoardLayout::COLUMN_SPACING).abs() < 1e-6);
            assert!(tableau.y < layout.stock.y);
        }
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().draw_three().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
