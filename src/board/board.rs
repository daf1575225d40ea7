//! Board structure with move history

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Snapshot of the grid, indexed `[row][col]`
pub type Grid = [[Option<Stone>; BOARD_SIZE]; BOARD_SIZE];

/// Record of a single placed stone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Pos,
    pub player: Stone,
    /// 1-based sequence number, fixed at creation
    pub number: u32,
    pub timestamp: DateTime<Utc>,
}

impl Move {
    #[inline]
    pub fn row(&self) -> u8 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> u8 {
        self.pos.col
    }

    pub fn notation(&self) -> String {
        self.pos.to_notation()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (#{})", self.player.symbol(), self.pos, self.number)
    }
}

/// Game board with move history
///
/// A cell is occupied exactly when some entry in `history` placed it, so the
/// history doubles as the undo log.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Option<Stone>; TOTAL_CELLS],
    history: Vec<Move>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
            history: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn is_valid_position(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// Check if position is on the board and unoccupied
    #[inline]
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        Pos::checked(row, col).is_some_and(|pos| self.get(pos).is_none())
    }

    /// Get stone at a position known to be on the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.cells[pos.to_index()]
    }

    /// Get stone at signed coordinates (None when empty or off the board)
    #[inline]
    pub fn get_stone(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::checked(row, col).and_then(|pos| self.get(pos))
    }

    /// Place a stone and record the move. Returns false without touching the
    /// board if the cell is occupied or off the board.
    pub fn place_stone(&mut self, row: i32, col: i32, stone: Stone) -> bool {
        if !self.is_empty(row, col) {
            return false;
        }
        let pos = Pos::new(row as u8, col as u8);
        self.cells[pos.to_index()] = Some(stone);
        self.history.push(Move {
            pos,
            player: stone,
            number: self.history.len() as u32 + 1,
            timestamp: Utc::now(),
        });
        true
    }

    /// Take back the most recent move
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        self.cells[last.pos.to_index()] = None;
        Some(last)
    }

    pub fn clear(&mut self) {
        self.cells = [None; TOTAL_CELLS];
        self.history.clear();
    }

    /// Independent copy of the grid
    pub fn grid_copy(&self) -> Grid {
        let mut grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            let pos = Pos::from_index(idx);
            grid[pos.row as usize][pos.col as usize] = *cell;
        }
        grid
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == TOTAL_CELLS
    }

    /// All empty cells in row-major order
    pub fn empty_positions(&self) -> Vec<Pos> {
        (0..TOTAL_CELLS)
            .filter(|&idx| self.cells[idx].is_none())
            .map(Pos::from_index)
            .collect()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Number of occupied cells, counted from the grid itself
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        assert!(board.place_stone(7, 7, Stone::Black));
        assert_eq!(board.get_stone(7, 7), Some(Stone::Black));
        assert!(!board.is_empty(7, 7));
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.move_history()[0].number, 1);
        assert_eq!(board.move_history()[0].pos, Pos::new(7, 7));
    }

    #[test]
    fn test_place_on_occupied_is_noop() {
        let mut board = Board::new();
        assert!(board.place_stone(3, 4, Stone::Black));
        let before = board.grid_copy();
        assert!(!board.place_stone(3, 4, Stone::White));
        assert_eq!(board.get_stone(3, 4), Some(Stone::Black));
        assert_eq!(board.grid_copy(), before);
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_out_of_range_is_not_an_error() {
        let mut board = Board::new();
        assert!(!board.is_valid_position(-1, 0));
        assert!(!board.is_valid_position(0, 15));
        assert!(board.is_valid_position(14, 14));
        assert!(!board.is_empty(15, 0));
        assert!(!board.is_empty(0, -1));
        assert_eq!(board.get_stone(-1, -1), None);
        assert_eq!(board.get_stone(20, 3), None);
        assert!(!board.place_stone(15, 15, Stone::Black));
        assert!(!board.place_stone(-3, 2, Stone::White));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_undo_restores_cell() {
        let mut board = Board::new();
        board.place_stone(0, 0, Stone::Black);
        board.place_stone(0, 1, Stone::White);

        let undone = board.undo_last_move().unwrap();
        assert_eq!(undone.player, Stone::White);
        assert_eq!(undone.pos, Pos::new(0, 1));
        assert_eq!(undone.number, 2);
        assert!(board.is_empty(0, 1));
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.get_stone(0, 0), Some(Stone::Black));
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut board = Board::new();
        assert!(board.undo_last_move().is_none());
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.empty_positions().len(), TOTAL_CELLS);
    }

    #[test]
    fn test_numbers_continue_after_undo() {
        let mut board = Board::new();
        board.place_stone(1, 1, Stone::Black);
        board.place_stone(2, 2, Stone::White);
        board.undo_last_move();
        board.place_stone(3, 3, Stone::White);
        let numbers: Vec<u32> = board.move_history().iter().map(|m| m.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        for col in 0..5 {
            board.place_stone(4, col, Stone::White);
        }
        board.clear();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.stone_count(), 0);
        assert!(board.grid_copy().iter().flatten().all(|c| c.is_none()));
    }

    #[test]
    fn test_grid_copy_does_not_alias() {
        let mut board = Board::new();
        board.place_stone(5, 6, Stone::Black);
        let copy = board.grid_copy();
        board.place_stone(6, 5, Stone::White);
        board.undo_last_move();
        board.undo_last_move();
        assert_eq!(copy[5][6], Some(Stone::Black));
        assert_eq!(copy[6][5], None);
        assert!(board.is_empty(5, 6));
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut board = Board::new();
        board.place_stone(0, 0, Stone::Black);
        board.place_stone(0, 2, Stone::White);
        let empty = board.empty_positions();
        assert_eq!(empty.len(), TOTAL_CELLS - 2);
        assert_eq!(empty[0], Pos::new(0, 1));
        assert_eq!(empty[1], Pos::new(0, 3));
        assert_eq!(*empty.last().unwrap(), Pos::new(14, 14));
        assert!(empty.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        let mut stone = Stone::Black;
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                assert!(!board.is_full());
                assert!(board.place_stone(row, col, stone));
                stone = stone.opponent();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.move_count(), 225);
        assert!(board.empty_positions().is_empty());
        board.undo_last_move();
        assert!(!board.is_full());
    }

    #[test]
    fn test_move_count_matches_stones() {
        let mut board = Board::new();
        let cells = [(7, 7), (7, 8), (8, 7), (7, 7), (20, 0), (8, 8)];
        let mut stone = Stone::Black;
        for (row, col) in cells {
            if board.place_stone(row, col, stone) {
                stone = stone.opponent();
            }
            assert_eq!(board.move_count(), board.stone_count());
        }
        board.undo_last_move();
        assert_eq!(board.move_count(), board.stone_count());
        assert_eq!(board.move_count(), 3);
    }

    #[test]
    fn test_move_display() {
        let mut board = Board::new();
        board.place_stone(7, 7, Stone::Black);
        let mv = board.last_move().unwrap();
        assert_eq!(mv.to_string(), "● H8 (#1)");
        assert_eq!(mv.notation(), "H8");
        assert_eq!((mv.row(), mv.col()), (7, 7));
    }
}
