//! Tic-tac-toe console entry point.

use anyhow::{Context, Result};
use clap::Parser;
use safe_input::SafeInput;
use std::io::IsTerminal;
use tictactoe_console::{Cli, ConsoleConfig, ConsoleGame};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?
        .with_overrides(cli.first_player, cli.scoreboard);

    initialize_tracing(config.log_filter());
    info!(?config, "Starting tic-tac-toe console");

    let mut game = ConsoleGame::new(SafeInput::stdio(), &config);
    let scoreboard = game.run()?;

    info!(summary = %scoreboard.summary(), "Exiting");
    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing(default_filter: &str) {
    let stderr = std::io::stderr();
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(stderr.is_terminal()),
        )
        .init();
}
