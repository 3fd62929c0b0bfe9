//! Noughts - tic-tac-toe game logic for 3x3 and 5x5 boards.
//!
//! The crate is built around two pure functions:
//!
//! - [`evaluate`] decides whether a board is won, drawn or still in play,
//!   and which line won it.
//! - [`select_move`] picks the computer's next cell with a one-ply
//!   heuristic (win, block, center, corner, first open cell).
//!
//! [`GameSession`] wraps them for callers that want turn alternation and
//! win streaks without writing their own bookkeeping.
//!
//! # Example
//!
//! ```
//! use noughts::{Board, Coord, Mark, evaluate, select_move};
//!
//! let board: Board = "XX./O../..O".parse().unwrap();
//! assert_eq!(select_move(&board, Mark::X, Mark::O), Some(Coord::new(0, 2)));
//! assert!(!evaluate(&board).is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod outcome;
mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use ai::{Decision, Tactic, choose_move, select_move};
pub use outcome::{LineKind, Outcome, WinningLine};
pub use rules::{evaluate, find_winning_line, is_full};
pub use session::{GameMode, GameSession, SessionSettings, Side, Streaks};
pub use types::{Board, BoardError, BoardSize, Cell, Coord, Mark};
