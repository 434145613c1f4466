//! Tic-tac-toe game engine.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid with legality checks, move application and rendering
//! - **Rules**: win and tie evaluation over the 8 fixed lines
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`
//! - **Contracts/Invariants**: move preconditions and postconditions
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameResult, GameSetup, Mark, Outcome};
//!
//! let mut game = GameSetup::new().start(Mark::X);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     let action = game.check_move(row, col).unwrap();
//!     match game.make_move(action).unwrap() {
//!         GameResult::InProgress(next) => game = next,
//!         GameResult::Finished(done) => {
//!             assert_eq!(done.outcome(), &Outcome::Won(Mark::X));
//!             return;
//!         }
//!     }
//! }
//! unreachable!();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod phases;
mod position;
mod types;
mod typestate;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use board::Board;
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, PlayersTurn};
pub use phases::Outcome;
pub use position::{BOARD_SIZE, CELL_COUNT, Position};
pub use types::{Cell, Mark};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
