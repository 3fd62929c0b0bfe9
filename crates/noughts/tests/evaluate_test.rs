//! Tests for outcome evaluation through the public API.

mod common;

use common::all_small_boards;
use noughts::{Board, Cell, Coord, LineKind, Mark, Outcome, evaluate};

fn board(text: &str) -> Board {
    text.parse().expect("valid board")
}

#[test]
fn test_full_board_with_broken_diagonal_is_draw() {
    // Main diagonal reads X, X, O.
    let outcome = evaluate(&board("XOX/OXO/OXO"));
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(outcome.winner(), None);
    assert!(outcome.winning_line().is_none());
}

#[test]
fn test_main_diagonal_win() {
    let outcome = evaluate(&board("XOX/OXO/OXX"));
    assert_eq!(outcome.winner(), Some(Mark::X));
    assert!(!outcome.is_draw());

    let line = outcome.winning_line().expect("winning line");
    assert_eq!(*line.kind(), LineKind::MainDiagonal);
    assert_eq!(
        line.cells(),
        &vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
    );
}

#[test]
fn test_from_rows_matches_text_form() {
    use noughts::Mark::{O, X};
    let rows = [
        [Some(X), Some(O), Some(X)],
        [Some(O), Some(X), Some(O)],
        [Some(O), Some(X), Some(O)],
    ];
    let from_rows = Board::from_rows(&rows).expect("valid rows");
    assert_eq!(from_rows, board("XOX/OXO/OXO"));
}

#[test]
fn test_row_reported_before_anything_else() {
    // Row 1, column 0 and the anti-diagonal are all complete for X.
    let outcome = evaluate(&board("XOX/XXX/XOO"));
    let line = outcome.winning_line().expect("winning line");
    assert_eq!(*line.kind(), LineKind::Row(1));
    assert_eq!(
        line.cells(),
        &vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)]
    );
}

#[test]
fn test_lower_row_index_wins_tie() {
    let outcome = evaluate(&board("OOO/XXX/..."));
    assert_eq!(outcome.winner(), Some(Mark::O));
}

#[test]
fn test_main_diagonal_before_anti_diagonal() {
    let outcome = evaluate(&board("O.O/.O./O.O"));
    assert_eq!(
        outcome.winning_line().map(|line| *line.kind()),
        Some(LineKind::MainDiagonal)
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(evaluate(&board("XOX/XOO/OXX")), Outcome::Draw);
}

#[test]
fn test_open_board_without_line_in_progress() {
    let outcome = evaluate(&board("XO./.X./O.."));
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(outcome.winner(), None);
    assert!(!outcome.is_draw());
    assert!(outcome.winning_line().is_none());
}

#[test]
fn test_five_by_five_column() {
    let outcome = evaluate(&board("..X../..X../..X../..X../..X.."));
    let line = outcome.winning_line().expect("winning line");
    assert_eq!(*line.kind(), LineKind::Column(2));
    assert_eq!(line.cells().len(), 5);
    assert!(line.contains(Coord::new(4, 2)));
}

#[test]
fn test_five_by_five_draw() {
    let outcome = evaluate(&board("XXOOX/OOXXO/XXOOX/OOXXO/XXOOX"));
    assert_eq!(outcome, Outcome::Draw);
}

#[test]
fn test_evaluate_twice_identical() {
    let b = board("XXO/O.X/...");
    assert_eq!(evaluate(&b), evaluate(&b));
}

#[test]
fn test_outcome_json_shape() {
    let outcome = evaluate(&board("XXX/OO./..."));
    let json = serde_json::to_value(&outcome).expect("serializable");
    assert_eq!(json["status"], "won");
    assert_eq!(json["mark"], "X");
    assert_eq!(json["line"]["kind"], serde_json::json!({ "row": 0 }));
    assert_eq!(json["line"]["cells"][2], serde_json::json!({ "row": 0, "col": 2 }));
}

#[test]
fn test_no_line_means_draw_exactly_when_full() {
    for b in all_small_boards() {
        let outcome = evaluate(&b);
        if outcome.winner().is_some() {
            continue;
        }
        let full = b.empty_cells().next().is_none();
        if full {
            assert_eq!(outcome, Outcome::Draw, "{b}");
        } else {
            assert_eq!(outcome, Outcome::InProgress, "{b}");
        }
    }
}

#[test]
fn test_winning_line_holds_winner_mark() {
    for b in all_small_boards() {
        if let Outcome::Won { mark, line } = evaluate(&b) {
            assert_eq!(line.cells().len(), 3, "{b}");
            assert!(
                line.cells()
                    .iter()
                    .all(|&coord| b.get(coord) == Some(Cell::Marked(mark))),
                "{b}"
            );
        }
    }
}
