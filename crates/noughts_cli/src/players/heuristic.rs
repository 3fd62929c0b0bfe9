//! Computer opponent backed by the one-ply heuristic.

use super::{Player, Turn};
use crate::ui::human_coord;
use anyhow::Result;
use noughts::GameSession;
use std::time::Duration;
use tracing::{debug, info};

/// AI that plays the session's opponent mark.
pub struct HeuristicAi {
    name: String,
    think: Duration,
}

impl HeuristicAi {
    /// Creates a new AI that pauses for `think` before each move.
    pub fn new(name: impl Into<String>, think: Duration) -> Self {
        Self {
            name: name.into(),
            think,
        }
    }
}

#[async_trait::async_trait]
impl Player for HeuristicAi {
    async fn next_turn(&mut self, session: &GameSession) -> Result<Turn> {
        debug!(ai = %self.name, "AI making move");

        // Pause so the reply doesn't land instantly
        tokio::time::sleep(self.think).await;

        let decision = session.ai_decision()?;
        info!(ai = %self.name, coord = %decision.coord, tactic = %decision.tactic, "AI chose cell");
        println!("{} plays {} ({})", self.name, human_coord(decision.coord), decision.tactic);
        Ok(Turn::Place(decision.coord))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
