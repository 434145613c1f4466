//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

/// Fewest moves after which either mark can hold a completed line.
pub const MIN_MOVES_FOR_WIN: usize = 5;

/// The 8 winning lines: rows, then columns, then main diagonal, then anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line fully held by `mark`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    let owned = Cell::Occupied(mark);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == owned))
}

/// True iff at least one of the 8 lines is entirely `mark`.
#[instrument(skip(board))]
pub fn has_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// Returns the mark holding a completed line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_win(&board, Mark::X));
        assert!(!has_win(&board, Mark::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Mark::O, &line);
            assert!(has_win(&board, Mark::O), "line {:?} should win", line);
            assert!(!has_win(&board, Mark::X));
            assert_eq!(winning_line(&board, Mark::O), Some(line));
            assert_eq!(winner(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(
            Mark::X,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert!(has_win(&board, Mark::X));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Cell::Occupied(Mark::O));
        assert!(!has_win(&board, Mark::X));
        assert!(!has_win(&board, Mark::O));
    }

    #[test]
    fn test_has_win_matches_line_table_for_all_boards() {
        // Every assignment of X to a subset of cells (the rest empty).
        for bits in 0u16..(1 << 9) {
            let held: Vec<Position> = Position::ALL
                .iter()
                .copied()
                .filter(|pos| bits & (1 << pos.to_index()) != 0)
                .collect();
            let board = board_with(Mark::X, &held);
            let expected = LINES
                .iter()
                .any(|line| line.iter().all(|pos| held.contains(pos)));
            assert_eq!(has_win(&board, Mark::X), expected, "bits {:09b}", bits);
        }
    }
}
