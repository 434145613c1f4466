//! Command-line interface for the tic-tac-toe console.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Mark;

/// Two-player tic-tac-toe for the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML config file
    #[arg(long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Mark that moves first in every game (X or O)
    #[arg(long)]
    pub first_player: Option<Mark>,

    /// Print the win/tie tally before exiting
    #[arg(long)]
    pub scoreboard: bool,
}
