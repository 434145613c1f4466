//! The console game loop.
//!
//! Setup → InProgress → Won | Tied, then a replay prompt that either
//! returns to Setup or ends the session.

use crate::config::ConsoleConfig;
use crate::scoreboard::Scoreboard;
use safe_input::{InputError, SafeInput};
use std::io::{BufRead, Write};
use tictactoe_engine::{
    BOARD_SIZE, Board, GameFinished, GameInProgress, GameResult, GameSetup, Mark, Move, MoveError,
    Outcome, Position,
};
use tracing::{debug, info, instrument};

const WELCOME: &str = "Welcome to Tic Tac Toe!";
const INVALID_MOVE: &str =
    "Invalid move! That spot is already taken or out of bounds. Please choose an empty spot.";
const TIE: &str = "It's a TIE! Good game!";
const REPLAY_PROMPT: &str = "Do you want to play again?";
const FAREWELL: &str = "Thanks for playing Tic Tac Toe!";

/// Failure that ends the console session.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameLoopError {
    /// The console could not supply input.
    #[display("{}", _0)]
    Input(InputError),

    /// The engine refused a move the loop had already validated.
    #[display("Engine rejected a validated move: {}", _0)]
    Engine(MoveError),
}

/// Interactive tic-tac-toe session over a pair of console streams.
pub struct ConsoleGame<R, W> {
    input: SafeInput<R, W>,
    first_player: Mark,
    show_scoreboard: bool,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a session that reads and writes through `input`.
    pub fn new(input: SafeInput<R, W>, config: &ConsoleConfig) -> Self {
        Self {
            input,
            first_player: *config.first_player(),
            show_scoreboard: *config.show_scoreboard(),
            scoreboard: Scoreboard::default(),
        }
    }

    /// Games finished so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the input provider, e.g. to inspect captured output.
    pub fn into_input(self) -> SafeInput<R, W> {
        self.input
    }

    /// Plays games until the players decline a rematch.
    #[instrument(skip(self), fields(first_player = %self.first_player))]
    pub fn run(&mut self) -> Result<Scoreboard, GameLoopError> {
        let mut setup = GameSetup::new();
        loop {
            let finished = self.play_game(setup)?;
            self.scoreboard.record(finished.outcome());

            if !self.input.yes_no(REPLAY_PROMPT)? {
                break;
            }
            debug!("Players chose a rematch");
            setup = finished.restart();
        }

        if self.show_scoreboard {
            self.input.say(self.scoreboard.summary())?;
        }
        self.input.say(FAREWELL)?;
        info!(games = *self.scoreboard.games(), "Session ended");
        Ok(self.scoreboard)
    }

    /// Plays one game from an empty board to a terminal state.
    #[instrument(skip(self, setup))]
    pub fn play_game(&mut self, setup: GameSetup) -> Result<GameFinished, GameLoopError> {
        self.input.banner(WELCOME)?;
        self.show_board(setup.board())?;

        let mut game = setup.start(self.first_player);
        loop {
            let action = self.read_legal_move(&game)?;
            match game.make_move(action)? {
                GameResult::InProgress(next) => {
                    self.show_board(next.board())?;
                    game = next;
                }
                GameResult::Finished(done) => {
                    self.show_board(done.board())?;
                    self.announce(done.outcome())?;
                    return Ok(done);
                }
            }
        }
    }

    /// Prompts the player to move until they name an open cell.
    ///
    /// A rejected pair is re-prompted without touching the game, so the
    /// turn count and the mark to move stay as they were.
    fn read_legal_move(&mut self, game: &GameInProgress) -> Result<Move, GameLoopError> {
        self.input.say(format_args!("It's {}'s turn.", game.to_move()))?;

        let high = BOARD_SIZE as i64;
        let row_prompt = format!("Enter row (1-{})", BOARD_SIZE);
        let col_prompt = format!("Enter column (1-{})", BOARD_SIZE);
        loop {
            let row = self.input.ranged_int(&row_prompt, 1, high)?;
            let col = self.input.ranged_int(&col_prompt, 1, high)?;

            let checked = match target(row, col) {
                Some(pos) => game.check_move(pos.row(), pos.col()),
                None => Err(MoveError::OutOfBounds {
                    row: usize::try_from(row.saturating_sub(1)).unwrap_or(usize::MAX),
                    col: usize::try_from(col.saturating_sub(1)).unwrap_or(usize::MAX),
                }),
            };
            match checked {
                Ok(action) => return Ok(action),
                Err(reason) => {
                    debug!(row, col, %reason, "Move rejected");
                    self.input.say(INVALID_MOVE)?;
                }
            }
        }
    }

    fn show_board(&mut self, board: &Board) -> Result<(), InputError> {
        self.input.print(format_args!("{}\n", board))
    }

    fn announce(&mut self, outcome: &Outcome) -> Result<(), InputError> {
        match outcome {
            Outcome::Won(mark) => self.input.banner(&format!("{} WINS! Congratulations!", mark)),
            Outcome::Tied => self.input.banner(TIE),
        }
    }
}

/// The cell named by the 1-based coordinates a player typed, if it is on the board.
fn target(row: i64, col: i64) -> Option<Position> {
    Position::from_one_based(usize::try_from(row).ok()?, usize::try_from(col).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_maps_typed_coordinates() {
        assert_eq!(target(1, 1), Some(Position::TopLeft));
        assert_eq!(target(2, 3), Some(Position::MiddleRight));
        assert_eq!(target(3, 3), Some(Position::BottomRight));
    }

    #[test]
    fn test_target_rejects_off_board() {
        assert_eq!(target(0, 1), None);
        assert_eq!(target(1, 4), None);
        assert_eq!(target(-1, 2), None);
        assert_eq!(target(i64::MIN, i64::MAX), None);
    }
}
