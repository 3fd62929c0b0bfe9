//! Board fixtures shared by the integration tests.

use noughts::{Board, Mark};
use strum::IntoEnumIterator;

/// Every 3x3 board with each cell empty, X or O.
pub fn all_small_boards() -> impl Iterator<Item = Board> {
    let states: Vec<Option<Mark>> = std::iter::once(None)
        .chain(Mark::iter().map(Some))
        .collect();
    let base = states.len();

    (0..base.pow(9)).map(move |mut code| {
        let mut rows = [[None; 3]; 3];
        for row in rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = states[code % base];
                code /= base;
            }
        }
        Board::from_rows(&rows).expect("3x3 rows")
    })
}
