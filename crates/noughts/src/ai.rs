//! Heuristic move selection.
//!
//! The selector looks exactly one ply ahead: it takes an immediate win,
//! blocks an immediate loss, and otherwise falls back to positional
//! defaults. It is not a game-tree search and will miss multi-move traps,
//! particularly on 5x5 boards.

use crate::rules::evaluate;
use crate::types::{Board, Coord, Mark};
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The rule that produced a move, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Tactic {
    /// Completes a line for the AI.
    #[display("win")]
    Win,
    /// Occupies the cell that would complete a line for the opponent.
    #[display("block")]
    Block,
    /// Takes the center cell.
    #[display("center")]
    Center,
    /// Takes the first free corner.
    #[display("corner")]
    Corner,
    /// Takes the first free cell in row-major order.
    #[display("first open cell")]
    FirstOpen,
}

/// A chosen cell together with the rule that picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Decision {
    /// Cell to play.
    pub coord: Coord,
    /// Why it was chosen.
    pub tactic: Tactic,
}

/// Picks the AI's next cell.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn select_move(board: &Board, ai: Mark, opponent: Mark) -> Option<Coord> {
    choose_move(board, ai, opponent).map(|decision| decision.coord)
}

/// Picks the AI's next cell and reports which tactic fired.
///
/// Rules are tried in order: win now, block the opponent, take the
/// center, take a corner, take any cell.
#[instrument(skip(board), fields(board = %board))]
pub fn choose_move(board: &Board, ai: Mark, opponent: Mark) -> Option<Decision> {
    debug_assert_ne!(ai, opponent, "AI and opponent must hold different marks");

    let decision = completing_cell(board, ai)
        .map(|coord| Decision::new(coord, Tactic::Win))
        .or_else(|| completing_cell(board, opponent).map(|coord| Decision::new(coord, Tactic::Block)))
        .or_else(|| {
            let center = center(board.side());
            board
                .is_empty(center)
                .then(|| Decision::new(center, Tactic::Center))
        })
        .or_else(|| {
            corners(board.side())
                .into_iter()
                .find(|&corner| board.is_empty(corner))
                .map(|corner| Decision::new(corner, Tactic::Corner))
        })
        .or_else(|| {
            board
                .empty_cells()
                .next()
                .map(|coord| Decision::new(coord, Tactic::FirstOpen))
        });

    match &decision {
        Some(decision) => debug!(coord = %decision.coord, tactic = %decision.tactic, "AI chose cell"),
        None => debug!("No empty cell left"),
    }
    decision
}

/// First empty cell, row-major, where `mark` would complete a line.
///
/// Each candidate is tried on a throwaway copy of the board.
fn completing_cell(board: &Board, mark: Mark) -> Option<Coord> {
    board
        .empty_cells()
        .find(|&coord| evaluate(&board.with_mark(coord, mark)).winner() == Some(mark))
}

fn center(side: usize) -> Coord {
    Coord::new(side / 2, side / 2)
}

fn corners(side: usize) -> [Coord; 4] {
    let last = side - 1;
    [
        Coord::new(0, 0),
        Coord::new(0, last),
        Coord::new(last, 0),
        Coord::new(last, last),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(board: &str, ai: Mark) -> Option<Decision> {
        let board: Board = board.parse().unwrap();
        choose_move(&board, ai, ai.opponent())
    }

    #[test]
    fn test_win_beats_block() {
        // Both X and O can complete a row; X takes its own win.
        let decision = decide("XX./OO./...", Mark::X).unwrap();
        assert_eq!(decision, Decision::new(Coord::new(0, 2), Tactic::Win));
    }

    #[test]
    fn test_block_when_no_win() {
        let decision = decide("X../OO./X..", Mark::X).unwrap();
        assert_eq!(decision, Decision::new(Coord::new(1, 2), Tactic::Block));
    }

    #[test]
    fn test_center_on_empty_board() {
        let decision = decide("...../...../...../...../.....", Mark::O).unwrap();
        assert_eq!(decision, Decision::new(Coord::new(2, 2), Tactic::Center));
    }

    #[test]
    fn test_corner_order() {
        // Center taken, top-left taken; next corner is top-right.
        let decision = decide("O../.X./...", Mark::X).unwrap();
        assert_eq!(decision, Decision::new(Coord::new(0, 2), Tactic::Corner));
    }

    #[test]
    fn test_first_open_when_corners_full() {
        // Nothing to win or block, center and corners all taken.
        let decision = decide("XOX/.O./OXO", Mark::O);
        assert_eq!(decision, Some(Decision::new(Coord::new(1, 0), Tactic::FirstOpen)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(decide("XOX/OXX/OXO", Mark::X), None);
    }
}
