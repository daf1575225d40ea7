//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

// Re-exports
pub use board::{Board, Grid, Move};

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Display glyph used in move listings
    pub fn symbol(self) -> &'static str {
        match self {
            Stone::Black => "●",
            Stone::White => "○",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Build a position from signed coordinates, `None` when off the board
    #[inline]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Column letter followed by 1-based row number, e.g. `H8`
    pub fn to_notation(self) -> String {
        format!("{}{}", (b'A' + self.col) as char, self.row + 1)
    }

    /// Parse notation such as `H8`; `None` on any malformed input
    pub fn from_notation(notation: &str) -> Option<Self> {
        notation.parse().ok()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

/// Reasons a notation string fails to parse
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NotationError {
    #[display("notation must be a column letter followed by a row number")]
    TooShort,
    #[display("column {:?} is outside A-O", _0)]
    Column(#[error(not(source))] char),
    #[display("row {:?} is not a number", _0)]
    RowNotNumeric(#[error(not(source))] String),
    #[display("row {} is outside 1-15", _0)]
    Row(#[error(not(source))] u32),
}

impl FromStr for Pos {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(NotationError::TooShort)?;
        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(NotationError::TooShort);
        }

        let letter = letter.to_ascii_uppercase();
        let last_col = (b'A' + BOARD_SIZE as u8 - 1) as char;
        if !('A'..=last_col).contains(&letter) {
            return Err(NotationError::Column(letter));
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| NotationError::RowNotNumeric(digits.to_string()))?;
        if row == 0 || row > BOARD_SIZE as u32 {
            return Err(NotationError::Row(row));
        }

        Ok(Pos::new((row - 1) as u8, letter as u8 - b'A'))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
