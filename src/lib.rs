//! Gomoku rules engine
//!
//! Standard Gomoku (five-in-a-row) on a fixed 15x15 board:
//! - Black moves first, players alternate
//! - 5 or more in a row wins (overlines allowed)
//! - A full board with no five is a draw
//! - Any number of moves can be taken back
//!
//! # Architecture
//!
//! - [`board`]: Grid of stones, move history, positions and notation
//! - [`rules`]: Win detection along the four line directions
//! - [`engine`]: Turn order, outcome state machine, undo and reset
//! - [`ui`]: egui front end driving an [`engine::GameEngine`]
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameEngine, GameState, MoveResult, Pos, Stone};
//!
//! let mut engine = GameEngine::new();
//! let center = Pos::from_notation("H8").unwrap();
//!
//! let result = engine.make_move(center.row as i32, center.col as i32);
//! assert!(result.is_success());
//! assert_eq!(engine.board().get(center), Some(Stone::Black));
//! assert_eq!(engine.current_player(), Stone::White);
//!
//! // Playing on an occupied cell changes nothing
//! assert!(matches!(engine.make_move(7, 7), MoveResult::InvalidMove(_)));
//! assert_eq!(engine.state(), GameState::Playing);
//! ```
//!
//! The core is single-threaded: every command takes `&mut self` and completes
//! immediately. Hosts sharing a game between threads must serialize access.

pub mod board;
pub mod engine;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Grid, Move, NotationError, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{GameEngine, GameState, MoveError, MoveResult, Status, UndoResult};
pub use rules::{Direction, WinningLine};
