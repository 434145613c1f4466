//! Phase-specific typestate structs for a tic-tac-toe game.
//!
//! Each phase is its own type with phase-specific fields: a
//! `GameFinished` always has an outcome and a `GameInProgress` never does.
//! Setup → InProgress → Finished(Won | Tied) → restart → Setup.

use super::action::{Move, MoveError};
use super::contracts::{Contract, LegalMove, MoveContract};
use super::phases::Outcome;
use super::rules;
use super::{Board, Cell, Mark, Position};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: empty board, no history.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with `first` to move.
    #[instrument(skip(self))]
    pub fn start(self, first: Mark) -> GameInProgress {
        info!(%first, "Game started");
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            first,
            to_move: first,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: accepts moves.
///
/// The turn count is the length of the history, so it only advances when
/// a move is actually applied.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) first: Mark,
    pub(crate) to_move: Mark,
}

impl GameInProgress {
    /// Validates zero-based coordinates for the mark to move.
    ///
    /// Nothing is mutated; on `Ok` the returned move can be passed straight
    /// to [`GameInProgress::make_move`].
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn check_move(&self, row: usize, col: usize) -> Result<Move, MoveError> {
        let position = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        let action = Move::new(self.to_move, position);
        LegalMove::check(&action, self)?;
        Ok(action)
    }

    /// True iff `(row, col)` is a legal move right now.
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        self.board.is_legal_move(row, col)
    }

    /// Applies a move, consuming self and transitioning to the next phase.
    ///
    /// Preconditions are always checked; postconditions in debug builds only.
    /// The win check only considers the mark that just moved.
    ///
    /// # Errors
    ///
    /// Returns the precondition failure if the cell is taken or it's the
    /// other mark's turn.
    #[instrument(skip(self), fields(turn = self.turn_count() + 1))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board.set(action.position, Cell::Occupied(action.mark));
        game.history.push(action);
        game.to_move = action.mark.opponent();
        debug!(%action, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        if game.turn_count() >= rules::MIN_MOVES_FOR_WIN && rules::has_win(&game.board, action.mark) {
            return Ok(GameResult::Finished(game.finish(Outcome::Won(action.mark))));
        }

        if rules::is_tie(&game.board, action.mark) {
            return Ok(GameResult::Finished(game.finish(Outcome::Tied)));
        }

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome) -> GameFinished {
        info!(%outcome, turns = self.history.len(), "Game finished");
        GameFinished {
            board: self.board,
            history: self.history,
            outcome,
        }
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the mark that opened the game.
    pub fn first_mark(&self) -> Mark {
        self.first
    }

    /// Number of moves applied so far.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns open positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Replays moves from an empty board with `first` to move.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first: Mark, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start(first);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished: the outcome is always present.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves the game took.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    /// Restarts the game (consumes finished, returns a fresh setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        let mut board = self.board;
        board.reset();
        GameSetup { board }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
