//! Named board positions and coordinate conversions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A position on the tic-tac-toe board.
///
/// Positions are always in range; raw `(row, col)` pairs coming from a
/// player go through [`Position::from_coords`] or
/// [`Position::from_one_based`], which reject anything off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; CELL_COUNT] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / BOARD_SIZE
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % BOARD_SIZE
    }

    /// Creates position from zero-based coordinates, `None` if off the board.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Self::from_index(row * BOARD_SIZE + col)
    }

    /// Creates position from the 1-based coordinates players type in.
    #[instrument]
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        Self::from_coords(row.checked_sub(1)?, col.checked_sub(1)?)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for pos in Position::iter() {
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_from_coords_rejects_off_board() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(Position::from_coords(usize::MAX, 1), None);
    }

    #[test]
    fn test_one_based_conversion() {
        assert_eq!(Position::from_one_based(1, 1), Some(Position::TopLeft));
        assert_eq!(Position::from_one_based(2, 2), Some(Position::Center));
        assert_eq!(Position::from_one_based(3, 1), Some(Position::BottomLeft));
        assert_eq!(Position::from_one_based(0, 1), None);
        assert_eq!(Position::from_one_based(1, 4), None);
    }
}
