//! Puzzle outcome.

use super::Hazard;
use serde::{Deserialize, Serialize};

/// Where the puzzle stands after the last crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// Something got eaten on the unattended bank.
    Lost(Hazard),
    /// All five items reached the right bank.
    Won,
}

impl GameOutcome {
    /// Returns true once the puzzle is won or lost.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the hazard that ended the puzzle, if it was lost.
    pub fn hazard(&self) -> Option<Hazard> {
        match self {
            GameOutcome::Lost(hazard) => Some(*hazard),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Lost(hazard) => write!(f, "Lost: {}", hazard),
            GameOutcome::Won => write!(f, "Won: everything made it across safely"),
        }
    }
}
