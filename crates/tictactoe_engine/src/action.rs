//! First-class move types for tic-tac-toe.
//!
//! A move is the player's intent, validated before it touches the board.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark goes.
    pub position: Position,
}

impl Move {
    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} (row {}, column {})",
            self.mark,
            self.position.label(),
            self.position.row() + 1,
            self.position.col() + 1
        )
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates are not on the board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Zero-based row that was requested.
        row: usize,
        /// Zero-based column that was requested.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already taken", _0)]
    CellOccupied(Position),

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Mark),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
