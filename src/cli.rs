//! Command-line interface for tateti.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tateti::{ListOrder, OutputFormat};

/// Ta-te-ti - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tateti")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (defaults to ./tateti.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Initial move-list order
        #[arg(long, value_enum)]
        order: Option<ListOrder>,

        /// File receiving logs while the UI runs
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Replay a list of moves and print the resulting screen
    Replay {
        /// Cell indices 0-8 in play order, e.g. "4,0,1"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// History index to jump to after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Flip the move-list order after the moves
        #[arg(long)]
        toggle: bool,

        /// Initial move-list order
        #[arg(long, value_enum)]
        order: Option<ListOrder>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
