//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, GameInProgress};
use super::Invariant;

/// Invariant: the board is exactly the replay of the move history.
///
/// Replaying must never hit an occupied cell, and the result must match
/// the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            let pos = mov.position;
            if reconstructed
                .apply_move(pos.row(), pos.col(), mov.mark)
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameInProgress, GameResult, GameSetup, Mark, Move, Position};

    #[test]
    fn test_multiple_moves_hold() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopRight),
            Move::new(Mark::O, Position::BottomLeft),
        ];

        let Ok(GameResult::InProgress(game)) = GameInProgress::replay(Mark::X, &moves) else {
            panic!("Expected in-progress game");
        };
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let game = GameSetup::new().start(Mark::X);
        let action = Move::new(Mark::X, Position::Center);

        let Ok(GameResult::InProgress(mut game)) = game.make_move(action) else {
            panic!("Expected in-progress game");
        };
        game.board.set(Position::Center, Cell::Occupied(Mark::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
