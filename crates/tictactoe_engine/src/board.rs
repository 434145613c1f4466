//! The 3x3 board and its queries.

use super::action::MoveError;
use super::position::{BOARD_SIZE, CELL_COUNT, Position};
use super::rules;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Separator printed between rendered rows.
const ROW_SEPARATOR: &str = "---+---+---";

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at zero-based coordinates, `None` if off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Sets a cell unconditionally.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// True iff both coordinates are on the board and the cell there is empty.
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// Places `mark` at zero-based coordinates.
    ///
    /// # Errors
    ///
    /// Callers must check [`Board::is_legal_move`] first. An off-board or
    /// occupied target is rejected and the board is left untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<Position, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.set(pos, Cell::Occupied(mark));
        debug!(position = %pos, %mark, "Mark placed");
        Ok(pos)
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Positions still open for play.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// See [`rules::has_win`].
    pub fn has_win(&self, mark: Mark) -> bool {
        rules::has_win(self, mark)
    }

    /// See [`rules::is_full`].
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Formats the board with `|` column dividers and `---+---+---` row separators.
    ///
    /// Every line, including the last row, ends in a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIZE {
            let line = (0..BOARD_SIZE)
                .map(|col| format!(" {} ", self.cells[row * BOARD_SIZE + col]))
                .collect::<Vec<_>>()
                .join("|");
            out.push_str(&line);
            out.push('\n');
            if row < BOARD_SIZE - 1 {
                out.push_str(ROW_SEPARATOR);
                out.push('\n');
            }
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
