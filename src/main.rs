//! Ta-te-ti - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tateti::{ReplayScript, Settings, logging, parse_moves, render};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { order, log_file } => {
            run_tui(settings.with_overrides(order, log_file))
        }
        Command::Replay {
            moves,
            jump,
            toggle,
            order,
            format,
        } => run_replay(settings, &moves, jump, toggle, order, format),
    }
}

/// Run the interactive terminal UI
fn run_tui(settings: Settings) -> Result<()> {
    logging::init_file(settings.log_file(), settings.log_filter())?;
    info!(log_file = %settings.log_file().display(), "Starting Ta-te-ti");
    tateti::tui::run(&settings)
}

/// Replay scripted moves and print the resulting view
fn run_replay(
    settings: Settings,
    moves: &str,
    jump: Option<usize>,
    toggle: bool,
    order: Option<tateti::ListOrder>,
    format: tateti::OutputFormat,
) -> Result<()> {
    logging::init_stderr(settings.log_filter());
    let settings = settings.with_overrides(order, None);

    let script = ReplayScript::new(parse_moves(moves)?, jump, toggle, *settings.initial_order());
    let game = script.run()?;
    println!("{}", render(&game.view(), format)?);
    Ok(())
}
