//! Two-player tic-tac-toe played over a text console.
//!
//! Wires the [`tictactoe_engine`] game phases to [`safe_input`] prompts.
//!
//! # Example
//!
//! ```
//! use safe_input::SafeInput;
//! use std::io::Cursor;
//! use tictactoe_console::{ConsoleConfig, ConsoleGame};
//!
//! // X takes the top row while O plays the center and a corner.
//! let script = "1\n1\n2\n2\n1\n2\n3\n3\n1\n3\nn\n";
//! let input = SafeInput::new(Cursor::new(script.as_bytes().to_vec()), Vec::<u8>::new());
//! let mut game = ConsoleGame::new(input, &ConsoleConfig::default());
//! let tally = game.run().unwrap();
//! assert_eq!(*tally.x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod game_loop;
mod scoreboard;

pub use cli::Cli;
pub use config::{ConfigError, ConsoleConfig};
pub use game_loop::{ConsoleGame, GameLoopError};
pub use scoreboard::Scoreboard;
