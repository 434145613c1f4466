//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::win::has_win;
use tracing::instrument;

/// True iff no cell is empty.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A tie: the board is full and the mark that just moved has no line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board, last_mark: Mark) -> bool {
    is_full(board) && !has_win(board, last_mark)
}
