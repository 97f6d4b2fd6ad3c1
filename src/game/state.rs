//! Match state machine.

use serde::{Deserialize, Serialize};

/// Top-level state of the game.
///
/// Transitions:
/// - Home -> Dealing (new match), Home -> Playing (continue)
/// - Dealing -> Playing (deal finished)
/// - Playing -> Home, Playing -> Paused, Playing -> Win
/// - Paused -> Playing (continue), Paused -> Dealing (restart)
/// - Win -> Home, Win -> Dealing (new match)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Home,
    Dealing,
    Playing,
    Paused,
    Win,
}

impl GameState {
    /// Whether the state machine allows moving from `self` to `to`.
    #[must_use]
    pub fn can_transition_to(self, to: GameState) -> bool {
        use GameState::*;
        matches!(
            (self, to),
            (Home, Dealing)
                | (Home, Playing)
                | (Dealing, Playing)
                | (Playing, Home)
                | (Playing, Paused)
                | (Playing, Win)
                | (Paused, Playing)
                | (Paused, Dealing)
                | (Win, Home)
                | (Win, Dealing)
        )
    }

    /// Whether player moves are accepted.
    #[must_use]
    pub fn accepts_moves(self) -> bool {
        self == GameState::Playing
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
