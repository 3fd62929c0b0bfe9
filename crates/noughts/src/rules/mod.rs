//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to N-in-a-row rules. Nothing here caches state between calls: every
//! evaluation is computed fresh from the cells it is given.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winning_line;

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board.
///
/// A complete line wins, checked rows first, then columns, then the main
/// diagonal, then the anti-diagonal. Without a winner, a full board is a
/// draw and anything else is still in progress.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = find_winning_line(board) {
        return Outcome::Won { mark, line };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::LineKind;
    use crate::types::{Coord, Mark};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::default()), Outcome::InProgress);
    }

    #[test]
    fn test_row_reported_before_column() {
        // Row 0 and column 0 are both complete; the row wins the tie-break.
        let board: Board = "XXX/XO./XO.".parse().unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(
            outcome.winning_line().map(|line| *line.kind()),
            Some(LineKind::Row(0))
        );
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let board: Board = "O.X/OO./OXO".parse().unwrap();
        let line = evaluate(&board).winning_line().cloned().unwrap();
        assert_eq!(*line.kind(), LineKind::Column(0));
        assert_eq!(
            line.cells(),
            &vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
