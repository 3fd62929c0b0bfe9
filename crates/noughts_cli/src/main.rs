//! Noughts - terminal front end.
//!
//! Interactive play against the heuristic AI or a second player, plus
//! one-shot `evaluate` and `suggest` commands for scripting.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod orchestrator;
mod players;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use input::{LineInput, confirm};
use noughts::{Board, BoardSize, GameMode, GameSession, Mark, choose_move, evaluate};
use orchestrator::{GameEnd, Orchestrator};
use players::{HeuristicAi, HumanPlayer, Player};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            mode,
            mark,
            think_ms,
            config,
        } => run_play(config, size, mode, mark, think_ms).await,
        Command::Evaluate { board, json } => run_evaluate(&board, json),
        Command::Suggest { board, ai, json } => run_suggest(&board, ai, json),
    }
}

/// Run an interactive session until the players stop
#[instrument]
async fn run_play(
    config_path: Option<PathBuf>,
    size: Option<BoardSize>,
    mode: Option<GameMode>,
    mark: Option<Mark>,
    think_ms: Option<u64>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(size, mode, mark, think_ms);

    let settings = *config.game();
    info!(?settings, "Starting interactive session");

    let input = LineInput::stdin();
    let (player, opponent): (Box<dyn Player>, Box<dyn Player>) = match settings.mode() {
        GameMode::Single => (
            Box::new(HumanPlayer::new("You", input.clone())),
            Box::new(HeuristicAi::new("AI", config.think_delay())),
        ),
        GameMode::Two => (
            Box::new(HumanPlayer::new("Player 1", input.clone())),
            Box::new(HumanPlayer::new("Player 2", input.clone())),
        ),
    };

    println!(
        "Noughts {} - you are {}. X moves first.",
        settings.size(),
        settings.player_mark()
    );
    println!("Moves: `row col` (e.g. `2 3`) or a cell number; `q` quits.");

    let mut orchestrator = Orchestrator::new(GameSession::new(settings), player, opponent);
    loop {
        if orchestrator.play_game().await? == GameEnd::Quit {
            break;
        }
        println!("{}", orchestrator.streak_line());

        if !confirm(&input, "Play again? [y/N] ").await? {
            break;
        }
        orchestrator.session_mut().restart();
    }

    info!(streaks = ?orchestrator.session().streaks(), "Session finished");
    println!("Thanks for playing.");
    Ok(())
}

/// Print the outcome of a board
#[instrument(skip(board), fields(board = %board))]
fn run_evaluate(board: &Board, json: bool) -> Result<()> {
    let outcome = evaluate(board);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print!("{}", ui::render_board(board, outcome.winning_line()));
    println!("{outcome}");
    if let Some(line) = outcome.winning_line() {
        let cells: Vec<String> = line.cells().iter().map(ToString::to_string).collect();
        println!("Line: {}", cells.join(" "));
    }
    Ok(())
}

/// Print the cell the AI would choose
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(board: &Board, ai: Mark, json: bool) -> Result<()> {
    let outcome = evaluate(board);
    let decision = if outcome.is_over() {
        None
    } else {
        choose_move(board, ai, ai.opponent())
    };

    if json {
        let report = serde_json::json!({
            "ai": ai,
            "outcome": outcome,
            "decision": decision,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", ui::render_board(board, outcome.winning_line()));
    match decision {
        Some(decision) => println!(
            "{ai} plays {} = {} ({})",
            decision.coord,
            ui::human_coord(decision.coord),
            decision.tactic
        ),
        None => println!("No move: {outcome}"),
    }
    Ok(())
}
