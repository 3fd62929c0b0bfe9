//! Win detection logic for tic-tac-toe.

use crate::outcome::{LineKind, WinningLine};
use crate::types::{Board, Cell, Coord, Mark};
use tracing::instrument;

/// Finds the first complete line on the board.
///
/// Returns the mark that owns it and the line itself, or `None` if no
/// row, column or diagonal is filled with a single mark.
#[instrument(level = "trace", skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, WinningLine)> {
    let side = board.side();
    LineKind::all(side).find_map(|kind| {
        let cells = kind.cells(side);
        line_owner(board, &cells).map(|mark| (mark, WinningLine::new(kind, cells)))
    })
}

fn line_owner(board: &Board, cells: &[Coord]) -> Option<Mark> {
    let (first, rest) = cells.split_first()?;
    let mark = board.get(*first)?.mark()?;
    rest.iter()
        .all(|&coord| board.get(coord) == Some(Cell::Marked(mark)))
        .then_some(mark)
}
