//! Game orchestration between players.

use crate::players::{Player, Turn};
use crate::ui;
use anyhow::Result;
use noughts::{GameSession, Mark, Outcome, Side};
use tracing::{debug, info, warn};

/// How a game loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    /// Game reached a win or draw.
    Finished(Outcome),
    /// A player left before the end.
    Quit,
}

/// Orchestrates gameplay between the player and the opponent.
pub struct Orchestrator {
    session: GameSession,
    player: Box<dyn Player>,
    opponent: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    ///
    /// `player` holds the session's player mark, `opponent` the other.
    pub fn new(session: GameSession, player: Box<dyn Player>, opponent: Box<dyn Player>) -> Self {
        Self {
            session,
            player,
            opponent,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the session mutably, e.g. to restart it.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    fn name_of(&self, mark: Mark) -> &str {
        match self.session.side_of(mark) {
            Side::Player => self.player.name(),
            Side::Opponent => self.opponent.name(),
        }
    }

    /// Streak summary, e.g. `Streaks: You 2 - AI 0`.
    pub fn streak_line(&self) -> String {
        let streaks = self.session.streaks();
        format!(
            "Streaks: {} {} - {} {}",
            self.player.name(),
            streaks.player(),
            self.opponent.name(),
            streaks.opponent()
        )
    }

    /// Plays the current game to the end.
    pub async fn play_game(&mut self) -> Result<GameEnd> {
        info!(size = %self.session.board().size(), "Starting game orchestration");

        loop {
            println!(
                "\n{}",
                ui::render_board(self.session.board(), self.session.outcome().winning_line())
            );

            let outcome = self.session.outcome();
            if outcome.is_over() {
                let winner = outcome.winner().map(|mark| self.name_of(mark));
                println!("{}", ui::result_line(outcome, winner));
                return Ok(GameEnd::Finished(outcome.clone()));
            }

            let mark = self.session.to_move();
            println!("{}", ui::turn_line(self.name_of(mark), mark));

            let player = match self.session.side_of(mark) {
                Side::Player => &mut self.player,
                Side::Opponent => &mut self.opponent,
            };

            debug!(player = %player.name(), "Waiting for move");
            match player.next_turn(&self.session).await? {
                Turn::Quit => {
                    info!(player = %player.name(), "Player quit");
                    return Ok(GameEnd::Quit);
                }
                Turn::Place(coord) => {
                    if let Err(err) = self.session.place(coord) {
                        warn!(%err, %coord, "Rejected move");
                        println!("{err}");
                    }
                }
            }
        }
    }
}
