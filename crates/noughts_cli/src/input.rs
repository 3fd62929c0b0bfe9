//! Line-based terminal input.

use noughts::Coord;
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, instrument};

/// Shared source of input lines.
///
/// Several players on one terminal read from the same stream, so the
/// receiver sits behind a mutex and clones share it.
#[derive(Debug, Clone)]
pub struct LineInput {
    rx: Arc<Mutex<mpsc::UnboundedReceiver<String>>>,
}

impl LineInput {
    /// Wraps an existing channel.
    pub fn new(rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
        }
    }

    /// Reads stdin on a dedicated thread.
    ///
    /// The thread blocks on the terminal and is never joined.
    #[instrument]
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!("Stdin closed");
        });
        Self::new(rx)
    }

    /// Next line, or `None` once input is closed.
    pub async fn next_line(&self) -> Option<String> {
        self.rx.lock().await.recv().await
    }
}

/// What a human typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    /// Play this cell.
    Cell(Coord),
    /// Leave the game.
    Quit,
}

/// Parses a move.
///
/// Accepts `row col` or `row,col` (1-based), a single cell number
/// `1..=side*side` counted row by row, or `q`/`quit`.
pub fn parse_input(line: &str, side: usize) -> Option<HumanInput> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(HumanInput::Quit);
    }

    let numbers = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    let on_side = |n: usize| (1..=side).contains(&n);
    let coord = match numbers.as_slice() {
        &[cell] if (1..=side * side).contains(&cell) => Coord::new((cell - 1) / side, (cell - 1) % side),
        &[row, col] if on_side(row) && on_side(col) => Coord::new(row - 1, col - 1),
        _ => return None,
    };
    Some(HumanInput::Cell(coord))
}

/// Reads a yes/no answer; anything but `y`/`yes` is no.
pub async fn confirm(input: &LineInput, prompt: &str) -> std::io::Result<bool> {
    use std::io::Write;
    print!("{prompt}");
    std::io::stdout().flush()?;
    Ok(input
        .next_line()
        .await
        .is_some_and(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")))
}
