//! Core domain types for tic-tac-toe on a square board.

use crate::action::MoveError;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, EnumString};
use tracing::instrument;

/// One of the two game symbols.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    #[default]
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Marked)
    }
}

/// Zero-indexed (row, column) coordinate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    new,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, top row is 0.
    pub row: usize,
    /// Column index, left column is 0.
    pub col: usize,
}

/// Supported board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// Classic 3x3 board.
    #[default]
    Three,
    /// 5x5 board, five in a row to win.
    Five,
}

impl BoardSize {
    /// Number of cells along one side.
    pub const fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Five => 5,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            5 => Ok(BoardSize::Five),
            other => Err(BoardError::UnsupportedSize(other)),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

impl FromStr for BoardSize {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let side: usize = s
            .trim()
            .parse()
            .map_err(|_| BoardError::UnparsableSize(s.to_string()))?;
        BoardSize::try_from(side)
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.side();
        write!(f, "{side}x{side}")
    }
}

/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Only 3x3 and 5x5 boards are playable.
    #[display("Unsupported board size {_0}: only 3x3 and 5x5 boards are playable")]
    UnsupportedSize(usize),

    /// Board size text is not a number.
    #[display("Board size {_0:?} is not a number")]
    UnparsableSize(String),

    /// A row has a different length from the first row.
    #[display("Row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Row count and column count differ.
    #[display("Board has {rows} rows but {cols} columns")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Number of cells per row.
        cols: usize,
    },

    /// Character is not `X`, `O` or an empty marker.
    #[display("Unrecognised cell {_0:?} (expected X, O or .)")]
    InvalidCell(char),
}

impl std::error::Error for BoardError {}

/// Square tic-tac-toe board.
///
/// Cells are stored row-major. A `Board` can only be built through
/// [`Board::new`], [`Board::from_rows`] or [`FromStr`], all of which
/// guarantee an N×N grid of a supported size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let side = size.side();
        Self {
            size,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Builds a board from rows of optional marks (`None` is empty).
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows<R: AsRef<[Option<Mark>]>>(rows: &[R]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(height * width);

        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(BoardError::Ragged {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Cell::from));
        }

        if width != height {
            return Err(BoardError::NotSquare {
                rows: height,
                cols: width,
            });
        }

        let size = BoardSize::try_from(height)?;
        Ok(Self { size, cells })
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of cells along one side.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Checks whether the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.side() && coord.col < self.side()
    }

    /// Gets the cell at the coordinate, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Checks if the cell at the coordinate is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Places a mark on an empty cell.
    ///
    /// Marked cells are never overwritten.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), MoveError> {
        let index = self.index(coord).ok_or(MoveError::OutOfBounds(coord))?;
        if !self.cells[index].is_empty() {
            return Err(MoveError::Occupied(coord));
        }
        self.cells[index] = Cell::Marked(mark);
        Ok(())
    }

    /// Returns a copy of the board with `mark` added at `coord`.
    ///
    /// The coordinate must be an empty cell on the board.
    pub(crate) fn with_mark(&self, coord: Coord, mark: Mark) -> Self {
        let mut copy = self.clone();
        if let Some(index) = copy.index(coord) {
            copy.cells[index] = Cell::Marked(mark);
        }
        copy
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side())
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| Coord::new(row, col)))
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&coord| self.is_empty(coord))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.side() + coord.col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

/// Parses the compact text form: rows separated by `/` (or newlines),
/// cells `X`, `O` and `.` (`-` and `_` are also empty).
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .trim()
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(parse_cell)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_rows(&rows)
    }
}

fn parse_cell(c: char) -> Result<Option<Mark>, BoardError> {
    match c {
        'X' | 'x' => Ok(Some(Mark::X)),
        'O' | 'o' => Ok(Some(Mark::O)),
        '.' | '-' | '_' => Ok(None),
        other => Err(BoardError::InvalidCell(other)),
    }
}

/// Formats the board in the same compact form [`FromStr`] accepts.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                match cell {
                    Cell::Empty => f.write_str(".")?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}
