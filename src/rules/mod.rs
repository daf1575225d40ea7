//! Game rules for standard Gomoku
//!
//! Five or more in a row along any of the four directions wins.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_five_at_pos, scan_line, Direction, WinningLine, WIN_LENGTH};
