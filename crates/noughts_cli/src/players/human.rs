//! Human player reading moves from the terminal.

use super::{Player, Turn};
use crate::input::{HumanInput, LineInput, parse_input};
use crate::ui::human_coord;
use anyhow::Result;
use noughts::GameSession;
use std::io::Write;
use tracing::debug;

/// Human player typing moves at a prompt.
pub struct HumanPlayer {
    name: String,
    input: LineInput,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: LineInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn next_turn(&mut self, session: &GameSession) -> Result<Turn> {
        let side = session.board().side();
        loop {
            print!("{} ({}) > ", self.name, session.to_move());
            std::io::stdout().flush()?;

            let Some(line) = self.input.next_line().await else {
                debug!(player = %self.name, "Input closed");
                return Ok(Turn::Quit);
            };

            match parse_input(&line, side) {
                Some(HumanInput::Quit) => return Ok(Turn::Quit),
                Some(HumanInput::Cell(coord)) if session.board().is_empty(coord) => {
                    return Ok(Turn::Place(coord));
                }
                Some(HumanInput::Cell(coord)) => {
                    println!("{} is already taken.", human_coord(coord));
                }
                None => println!(
                    "Enter a row and column (e.g. `2 3`) or a cell number 1-{}; `q` quits.",
                    side * side
                ),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
