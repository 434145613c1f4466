//! Game outcomes.

use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// This mark completed a line.
    Won(super::Mark),
    /// The board filled with no completed line.
    Tied,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<super::Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::Tied => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tied)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Tied => write!(f, "Tie"),
        }
    }
}
