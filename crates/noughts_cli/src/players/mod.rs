//! Player trait and implementations.

mod heuristic;
mod human;

pub use heuristic::HeuristicAi;
pub use human::HumanPlayer;

use anyhow::Result;
use noughts::{Coord, GameSession};

/// What a player decided to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Mark this cell.
    Place(Coord),
    /// Abandon the session.
    Quit,
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's turn for the current session state.
    async fn next_turn(&mut self, session: &GameSession) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
