//! Plain-text rendering of boards and results.

use noughts::{Board, Cell, Coord, Mark, Outcome, WinningLine};

/// Draws the board with 1-based row and column labels.
///
/// Cells on the winning line are bracketed, e.g. `[X]`.
pub fn render_board(board: &Board, line: Option<&WinningLine>) -> String {
    let side = board.side();
    let mut out = String::from("   ");
    out.push_str(
        &(1..=side)
            .map(|col| format!(" {col} "))
            .collect::<Vec<_>>()
            .join(" "),
    );
    out.push('\n');

    let separator = format!("   {}\n", vec!["---"; side].join("+"));
    for (row, cells) in board.rows().enumerate() {
        if row > 0 {
            out.push_str(&separator);
        }
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let symbol = match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                if line.is_some_and(|line| line.contains(Coord::new(row, col))) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        out.push_str(&format!("{:>2} {}\n", row + 1, rendered.join("|")));
    }
    out
}

/// A coordinate as players count it (1-based).
pub fn human_coord(coord: Coord) -> String {
    format!("row {}, column {}", coord.row + 1, coord.col + 1)
}

/// Status line naming who moves next.
pub fn turn_line(name: &str, mark: Mark) -> String {
    format!("{name} to move ({mark})")
}

/// End-of-game banner.
pub fn result_line(outcome: &Outcome, winner_name: Option<&str>) -> String {
    match (outcome, winner_name) {
        (Outcome::Won { mark, .. }, Some(name)) => format!("{name} won as {mark}!"),
        (Outcome::Won { mark, .. }, None) => format!("{mark} wins!"),
        (Outcome::Draw, _) => "It's a draw!".to_string(),
        (Outcome::InProgress, _) => "Game in progress".to_string(),
    }
}
