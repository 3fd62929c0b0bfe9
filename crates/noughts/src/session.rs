//! Caller-owned game session: settings, turn alternation and win streaks.

use crate::action::{Move, MoveError};
use crate::ai::{Decision, choose_move};
use crate::outcome::Outcome;
use crate::rules::evaluate;
use crate::types::{Board, BoardSize, Coord, Mark};
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumString;
use tracing::{debug, info, instrument};

/// Who sits opposite the player.
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
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Player against the heuristic AI.
    #[default]
    #[display("single")]
    Single,
    /// Two players sharing one board.
    #[display("two")]
    Two,
}

/// Settings fixed for the length of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters, new)]
#[serde(default)]
pub struct SessionSettings {
    /// Board dimensions.
    size: BoardSize,
    /// Single or two player.
    mode: GameMode,
    /// The mark played by the (first) player.
    player_mark: Mark,
}

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Side {
    /// The player holding `player_mark`.
    Player,
    /// The AI in single mode, the second player otherwise.
    Opponent,
}

/// Consecutive wins per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Streaks {
    /// Current streak for the player.
    player: u32,
    /// Current streak for the opponent.
    opponent: u32,
}

impl Streaks {
    /// Current streak for a side.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Extends the winner's streak and breaks the other side's.
    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::Player => {
                self.player += 1;
                self.opponent = 0;
            }
            Side::Opponent => {
                self.opponent += 1;
                self.player = 0;
            }
        }
    }

    /// Zeroes both streaks.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A sequence of games played with the same settings.
///
/// X always moves first. Streaks survive [`GameSession::restart`].
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: SessionSettings,
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    history: Vec<Move>,
    streaks: Streaks,
}

impl GameSession {
    /// Starts a session with an empty board.
    #[instrument]
    pub fn new(settings: SessionSettings) -> Self {
        info!(size = %settings.size, mode = %settings.mode, "Starting game session");
        Self {
            settings,
            board: Board::new(settings.size),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            streaks: Streaks::default(),
        }
    }

    /// Returns the session settings.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the outcome of the current game.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the moves played this game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the win streaks.
    pub fn streaks(&self) -> &Streaks {
        &self.streaks
    }

    /// The mark held by the opponent side.
    pub fn opponent_mark(&self) -> Mark {
        self.settings.player_mark.opponent()
    }

    /// Which side holds the given mark.
    pub fn side_of(&self, mark: Mark) -> Side {
        if mark == self.settings.player_mark {
            Side::Player
        } else {
            Side::Opponent
        }
    }

    /// Checks if the heuristic AI should move next.
    pub fn is_ai_turn(&self) -> bool {
        self.settings.mode == GameMode::Single
            && !self.outcome.is_over()
            && self.to_move == self.opponent_mark()
    }

    /// Places the mark of the side to move.
    ///
    /// On a win the streaks are updated; while the game continues the
    /// turn passes to the other mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game is decided, and
    /// [`MoveError::OutOfBounds`] or [`MoveError::Occupied`] for an
    /// unplayable cell.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place(&mut self, coord: Coord) -> Result<Outcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move;
        self.board.place(coord, mark)?;
        self.history.push(Move::new(mark, coord));
        self.outcome = evaluate(&self.board);

        if let Some(winner) = self.outcome.winner() {
            let side = self.side_of(winner);
            self.streaks.record_win(side);
            info!(%winner, %side, streak = self.streaks.get(side), "Game won");
        } else if self.outcome.is_draw() {
            info!("Game drawn");
        } else {
            self.to_move = mark.opponent();
            debug!(next = %self.to_move, "Turn passes");
        }

        Ok(self.outcome.clone())
    }

    /// Asks the heuristic AI for its move without playing it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotAiTurn`] unless [`GameSession::is_ai_turn`].
    #[instrument(skip(self))]
    pub fn ai_decision(&self) -> Result<Decision, MoveError> {
        if !self.is_ai_turn() {
            return Err(MoveError::NotAiTurn);
        }
        choose_move(&self.board, self.opponent_mark(), self.settings.player_mark)
            .ok_or(MoveError::GameOver)
    }

    /// Lets the heuristic AI play its move.
    #[instrument(skip(self))]
    pub fn play_ai(&mut self) -> Result<(Decision, Outcome), MoveError> {
        let decision = self.ai_decision()?;
        let outcome = self.place(decision.coord)?;
        Ok((decision, outcome))
    }

    /// Clears the board for a new game, keeping settings and streaks.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board = Board::new(self.settings.size);
        self.to_move = Mark::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }

    /// Zeroes both streaks.
    pub fn reset_streaks(&mut self) {
        self.streaks.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_resets_loser() {
        let mut streaks = Streaks::default();
        streaks.record_win(Side::Player);
        streaks.record_win(Side::Player);
        assert_eq!(*streaks.player(), 2);

        streaks.record_win(Side::Opponent);
        assert_eq!(*streaks.player(), 0);
        assert_eq!(*streaks.opponent(), 1);
    }

    #[test]
    fn test_side_of_follows_player_mark() {
        let session = GameSession::new(SessionSettings::new(
            BoardSize::Three,
            GameMode::Single,
            Mark::O,
        ));
        assert_eq!(session.side_of(Mark::O), Side::Player);
        assert_eq!(session.side_of(Mark::X), Side::Opponent);
        assert_eq!(session.opponent_mark(), Mark::X);
    }

    #[test]
    fn test_ai_moves_first_when_player_is_o() {
        let session = GameSession::new(SessionSettings::new(
            BoardSize::Three,
            GameMode::Single,
            Mark::O,
        ));
        assert!(session.is_ai_turn());
        assert_eq!(session.ai_decision().map(|d| d.coord), Ok(Coord::new(1, 1)));
    }

    #[test]
    fn test_no_ai_in_two_player_mode() {
        let session = GameSession::new(SessionSettings::new(
            BoardSize::Three,
            GameMode::Two,
            Mark::O,
        ));
        assert!(!session.is_ai_turn());
        assert_eq!(session.ai_decision(), Err(MoveError::NotAiTurn));
    }

    #[test]
    fn test_mode_parses_from_text() {
        assert_eq!("single".parse::<GameMode>().unwrap(), GameMode::Single);
        assert_eq!("Two".parse::<GameMode>().unwrap(), GameMode::Two);
    }
}
