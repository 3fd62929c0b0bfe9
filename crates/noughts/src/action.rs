//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark
//! went where and can be replayed or logged independently of the board.

use crate::types::{Coord, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate is not on the board.
    #[display("Cell {_0} is off the board")]
    OutOfBounds(Coord),

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(Coord),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// An AI move was requested when the AI is not the side to move.
    #[display("It is not the AI's turn")]
    NotAiTurn,
}

impl std::error::Error for MoveError {}
