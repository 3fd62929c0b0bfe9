//! Game outcome and winning line types.

use crate::types::{Coord, Mark};
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A straight line of N cells that can win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Row at the given index.
    #[display("row {_0}")]
    Row(usize),
    /// Column at the given index.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl LineKind {
    /// Every line on a board with the given side, in win-check priority:
    /// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
    pub fn all(side: usize) -> impl Iterator<Item = LineKind> {
        (0..side)
            .map(LineKind::Row)
            .chain((0..side).map(LineKind::Column))
            .chain([LineKind::MainDiagonal, LineKind::AntiDiagonal])
    }

    /// Coordinates along this line, in reading order.
    ///
    /// Rows run left to right, columns top to bottom, and both diagonals
    /// start on the top row.
    pub fn cells(self, side: usize) -> Vec<Coord> {
        (0..side)
            .map(|i| match self {
                LineKind::Row(row) => Coord::new(row, i),
                LineKind::Column(col) => Coord::new(i, col),
                LineKind::MainDiagonal => Coord::new(i, i),
                LineKind::AntiDiagonal => Coord::new(i, side - 1 - i),
            })
            .collect()
    }
}

/// The line that decided a won game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct WinningLine {
    /// Which row, column or diagonal.
    kind: LineKind,
    /// The N coordinates of the line.
    cells: Vec<Coord>,
}

impl WinningLine {
    /// Checks if the coordinate is part of the line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// No line complete and at least one empty cell.
    InProgress,
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// Where it won.
        line: WinningLine,
    },
    /// Board full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning line for a won game.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Won { line, .. } => Some(line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { mark, line } => write!(f, "{mark} wins on {}", line.kind()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
