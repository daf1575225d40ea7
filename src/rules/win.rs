//! Win condition checking for standard Gomoku
//!
//! A player wins by completing five or more stones in a row along one of four
//! directions. Overlines count, and the whole contiguous run is reported.
//!
//! Detection is seeded at the stone just placed: only a line passing through
//! that cell can have been completed by the move.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Line directions as unit steps `(d_row, d_col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalMain,
    /// Top-right to bottom-left
    DiagonalAnti,
}

impl Direction {
    /// Scan order; the first qualifying direction wins ties
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalMain,
        Direction::DiagonalAnti,
    ];

    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalMain => (1, 1),
            Direction::DiagonalAnti => (1, -1),
        }
    }
}

/// A completed run of five or more stones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Ordered from the negative end of `direction` to the positive end
    pub positions: Vec<Pos>,
    pub direction: Direction,
}

impl WinningLine {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.contains(&pos)
    }
}

/// Count consecutive `stone`s starting one step from `pos` along `(dr, dc)`
#[inline]
fn run_length(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while board.get_stone(r, c) == Some(stone) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Collect the contiguous run of `stone` through `pos` along `dir`.
///
/// The seed cell is always included, even if it does not hold `stone`.
pub fn scan_line(board: &Board, pos: Pos, stone: Stone, dir: Direction) -> Vec<Pos> {
    let (dr, dc) = dir.delta();
    let back = run_length(board, pos, stone, -dr, -dc) as i32;
    let forward = run_length(board, pos, stone, dr, dc) as i32;

    (-back..=forward)
        .map(|i| Pos::new((pos.row as i32 + dr * i) as u8, (pos.col as i32 + dc * i) as u8))
        .collect()
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, stone: Stone) -> bool {
    Direction::ALL.iter().any(|dir| {
        let (dr, dc) = dir.delta();
        1 + run_length(board, pos, stone, dr, dc) + run_length(board, pos, stone, -dr, -dc)
            >= WIN_LENGTH
    })
}

/// Find the winning line through `pos` for `stone`, if the move completed one
pub fn find_winning_line(board: &Board, pos: Pos, stone: Stone) -> Option<WinningLine> {
    Direction::ALL.iter().find_map(|&direction| {
        let positions = scan_line(board, pos, stone, direction);
        (positions.len() >= WIN_LENGTH).then_some(WinningLine {
            positions,
            direction,
        })
    })
}
