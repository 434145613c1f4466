//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::typestate::GameInProgress;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the mark that is not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.mark == game.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.mark))
        }
    }
}

/// Composite precondition: the cell is empty and it's the mark's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: cell empty, mark's turn.
/// Postconditions: every [`TicTacToeInvariants`] member holds.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if after.turn_count() != before.turn_count() + 1 {
            warn!(
                before = before.turn_count(),
                after = after.turn_count(),
                "Turn count did not advance by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: turn count must advance by exactly one".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameResult, GameSetup, Mark, Position};

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameSetup::new().start(Mark::X);
        let action = Move::new(Mark::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameSetup::new().start(Mark::X);
        let Ok(GameResult::InProgress(game)) = game.make_move(Move::new(Mark::X, Position::Center))
        else {
            panic!("Expected in-progress game");
        };

        let action = Move::new(Mark::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Mark::X);
        let action = Move::new(Mark::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Mark::O))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start(Mark::X);
        let action = Move::new(Mark::X, Position::Center);

        let Ok(GameResult::InProgress(after)) = game.clone().make_move(action) else {
            panic!("Expected in-progress game");
        };
        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start(Mark::X);
        let action = Move::new(Mark::X, Position::Center);

        let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(action) else {
            panic!("Expected in-progress game");
        };
        after.board.set(Position::TopLeft, Cell::Occupied(Mark::O));
        assert!(MoveContract::post(&game, &after).is_err());
    }

    #[test]
    fn test_postcondition_requires_progress() {
        let game = GameSetup::new().start(Mark::X);
        assert!(matches!(
            MoveContract::post(&game, &game),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
