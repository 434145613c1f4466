//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so the game phases and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, MIN_MOVES_FOR_WIN, has_win, winner, winning_line};
