//! Game engine: turn order, outcome tracking and undo
//!
//! [`GameEngine`] owns a [`Board`] and is the only way callers mutate it. Every
//! command validates first, then updates the board and the [`Status`] together,
//! so a caller never observes a placed stone with a stale outcome.
//!
//! The outcome state machine:
//!
//! - [`GameState::Playing`] is the initial state.
//! - [`GameState::BlackWins`], [`GameState::WhiteWins`] and [`GameState::Draw`]
//!   are terminal. Only [`GameEngine::undo_move`] or [`GameEngine::reset_game`]
//!   leave them.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameEngine, GameState, MoveResult, Stone};
//!
//! let mut engine = GameEngine::new();
//! for col in 0..4 {
//!     let _ = engine.make_move(7, col); // Black
//!     let _ = engine.make_move(8, col); // White
//! }
//!
//! match engine.make_move(7, 4) {
//!     MoveResult::Success { state, winning_line, next_player, .. } => {
//!         assert_eq!(state, GameState::BlackWins);
//!         assert_eq!(winning_line.unwrap().len(), 5);
//!         assert_eq!(next_player, Stone::Black);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::board::{Board, Move, Pos, Stone};
use crate::rules::{find_winning_line, WinningLine};

/// Game outcome state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameState {
    /// Winning state for the given color
    #[inline]
    pub fn won_by(stone: Stone) -> Self {
        match stone {
            Stone::Black => GameState::BlackWins,
            Stone::White => GameState::WhiteWins,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != GameState::Playing
    }
}

/// Turn and outcome, always replaced as a whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub current_player: Stone,
    pub state: GameState,
    pub winner: Option<Stone>,
    pub winning_line: Option<WinningLine>,
}

impl Status {
    /// Black to move, nothing decided
    pub fn initial() -> Self {
        Self::playing(Stone::Black)
    }

    fn playing(current_player: Stone) -> Self {
        Self {
            current_player,
            state: GameState::Playing,
            winner: None,
            winning_line: None,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::initial()
    }
}

/// Why a move was rejected
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds { row: i32, col: i32 },
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Pos),
}

/// Result of [`GameEngine::make_move`]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The stone was placed
    Success {
        mv: Move,
        state: GameState,
        winner: Option<Stone>,
        winning_line: Option<WinningLine>,
        /// Player to move next; frozen at the mover once the game is over
        next_player: Stone,
    },
    /// Rejected without touching the board
    InvalidMove(MoveError),
    /// The game already finished in the carried state
    GameEnded(GameState),
}

impl MoveResult {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, MoveResult::Success { .. })
    }
}

/// Result of [`GameEngine::undo_move`]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoResult {
    Success(Move),
    NoMovesToUndo,
    /// Board refused to pop a non-empty history; indicates a logic error
    Error(String),
}

/// Gomoku rules engine for a single game
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    board: Board,
    status: Status,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a stone for the current player at `(row, col)`
    pub fn make_move(&mut self, row: i32, col: i32) -> MoveResult {
        if self.status.state.is_over() {
            return MoveResult::GameEnded(self.status.state);
        }
        let Some(pos) = Pos::checked(row, col) else {
            return MoveResult::InvalidMove(MoveError::OutOfBounds { row, col });
        };
        if !self.board.is_empty(row, col) {
            return MoveResult::InvalidMove(MoveError::Occupied(pos));
        }

        let player = self.status.current_player;
        let placed = self.board.place_stone(row, col, player);
        let Some(mv) = placed.then(|| self.board.last_move().cloned()).flatten() else {
            return MoveResult::InvalidMove(MoveError::Occupied(pos));
        };

        let status = match find_winning_line(&self.board, pos, player) {
            Some(line) => Status {
                current_player: player,
                state: GameState::won_by(player),
                winner: Some(player),
                winning_line: Some(line),
            },
            None if self.board.is_full() => Status {
                current_player: player,
                state: GameState::Draw,
                winner: None,
                winning_line: None,
            },
            None => Status::playing(player.opponent()),
        };
        self.status = status;

        debug!(%mv, state = ?self.status.state, "move accepted");
        if self.status.state.is_over() {
            info!(
                state = ?self.status.state,
                moves = self.board.move_count(),
                "game finished"
            );
        }

        MoveResult::Success {
            mv,
            state: self.status.state,
            winner: self.status.winner,
            winning_line: self.status.winning_line.clone(),
            next_player: self.status.current_player,
        }
    }

    /// Take back the last move and hand the turn back to whoever made it
    pub fn undo_move(&mut self) -> UndoResult {
        if self.board.move_count() == 0 {
            return UndoResult::NoMovesToUndo;
        }

        match self.board.undo_last_move() {
            Some(mv) => {
                self.status = Status::playing(mv.player);
                debug!(%mv, "move undone");
                UndoResult::Success(mv)
            }
            None => {
                error!(
                    moves = self.board.move_count(),
                    "board history non-empty but undo failed"
                );
                UndoResult::Error("failed to undo the last move".to_string())
            }
        }
    }

    /// Start a fresh game with Black to move
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.status = Status::initial();
        info!("game reset");
    }

    /// Whether `make_move(row, col)` would currently be accepted
    #[inline]
    pub fn can_make_move(&self, row: i32, col: i32) -> bool {
        self.status.state == GameState::Playing && self.board.is_empty(row, col)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.board.move_count()
    }

    /// Owned copy of the move log, oldest first
    pub fn move_history(&self) -> Vec<Move> {
        self.board.move_history().to_vec()
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.status.current_player
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.status.state
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.status.winner
    }

    #[inline]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.status.winning_line.as_ref()
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }
}
