//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::{Board, BoardSize, GameMode, Mark};
use std::path::PathBuf;

/// Noughts - tic-tac-toe on 3x3 and 5x5 boards
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a heuristic AI or a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Board side length (3 or 5)
        #[arg(short, long)]
        size: Option<BoardSize>,

        /// `single` to play the AI, `two` for two players on one terminal
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Mark for the (first) player; X always moves first
        #[arg(long)]
        mark: Option<Mark>,

        /// How long the AI pauses before moving, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,

        /// TOML file with default settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Report the outcome of a board, e.g. `XOX/OXO/OXX`
    Evaluate {
        /// Rows separated by `/`, cells `X`, `O` or `.`
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the cell the AI would play on a board
    Suggest {
        /// Rows separated by `/`, cells `X`, `O` or `.`
        board: Board,

        /// Mark the AI is playing
        #[arg(long, default_value = "O")]
        ai: Mark,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
