//! Board module - manages the game grid
//!
//! The board is a 22x10 grid where each cell is empty or holds the color of a
//! locked piece. Uses a flat row-major array for cache locality and zero allocation.
//! Coordinates: (row, column) where row ranges 0..21 (top to bottom) and column
//! ranges 0..9 (left to right). Rows 0 and 1 are hidden by the view; the board
//! itself treats them like any other row.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, Color, BOARD_COLUMNS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLUMNS as usize);

const COLUMNS: usize = BOARD_COLUMNS as usize;
const ROWS: usize = BOARD_ROWS as usize;

/// Row indices removed by one clear, bottom-most first
pub type ClearedRows = ArrayVec<usize, ROWS>;

/// The locked-cell grid - 22 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + column)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, column)
    #[inline(always)]
    fn index(row: i8, column: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || column < 0 || column >= BOARD_COLUMNS as i8 {
            return None;
        }
        Some((row as usize) * COLUMNS + (column as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn columns(&self) -> u8 {
        BOARD_COLUMNS
    }

    /// Get cell at (row, column), or `None` if out of bounds
    pub fn get(&self, row: i8, column: i8) -> Option<Cell> {
        Self::index(row, column).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, column)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, column: i8, cell: Cell) -> bool {
        match Self::index(row, column) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (row, column) blocks a piece.
    ///
    /// Anything outside the grid counts as filled, so the walls and the floor
    /// are solid.
    #[inline]
    pub fn is_cell_filled(&self, row: i8, column: i8) -> bool {
        !matches!(self.get(row, column), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS {
            return false;
        }
        let start = row * COLUMNS;
        self.cells[start..start + COLUMNS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Number of filled cells in a row
    pub fn fill_count(&self, row: usize) -> usize {
        if row >= ROWS {
            return 0;
        }
        let start = row * COLUMNS;
        self.cells[start..start + COLUMNS]
            .iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Delete every full row and insert as many empty rows at the top.
    ///
    /// Rows above a deleted row shift down; the grid keeps its size. Returns the
    /// deleted row indices in the order they were found, scanning from the
    /// bottom. Uses a two-pointer compaction with no allocation.
    pub fn remove_filled_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = ROWS;

        for read_row in (0..ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * COLUMNS;
                    self.cells.copy_within(src..src + COLUMNS, write_row * COLUMNS);
                }
            }
        }

        // Everything above the last kept row is new, empty space.
        self.cells[..write_row * COLUMNS].fill(None);

        cleared
    }

    /// Write a piece's current rotation into the grid in its color.
    ///
    /// Returns false without touching the grid if any of its cells is out of
    /// bounds or already filled.
    pub fn lock_piece(&mut self, piece: &Piece) -> bool {
        if piece
            .board_cells()
            .any(|(row, column)| self.is_cell_filled(row, column))
        {
            return false;
        }

        let color = piece.color();
        for (row, column) in piece.board_cells() {
            self.set(row, column, Some(color));
        }
        true
    }

    /// Fill a whole row with one color
    pub fn fill_row(&mut self, row: usize, color: Color) {
        if row < ROWS {
            let start = row * COLUMNS;
            self.cells[start..start + COLUMNS].fill(Some(color));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= ROWS {
            return None;
        }
        let start = row * COLUMNS;
        Some(&self.cells[start..start + COLUMNS])
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from 22 rows of 10 cells
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are wrong.
    pub fn from_rows(rows: &[[Cell; COLUMNS]]) -> Self {
        assert_eq!(rows.len(), ROWS, "a board has exactly {} rows", ROWS);
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            board.cells[r * COLUMNS..(r + 1) * COLUMNS].copy_from_slice(row);
        }
        board
    }

    /// Copy the grid out as rows
    pub fn to_rows(&self) -> [[Cell; COLUMNS]; ROWS] {
        let mut out = [[None; COLUMNS]; ROWS];
        for (r, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * COLUMNS..(r + 1) * COLUMNS]);
        }
        out
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
    use crate::pieces;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(21, 9), Some(219));
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(22, 0), None);
        assert_eq!(Board::index(-1, 0), None);
    }

    #[test]
    fn test_board_flat_array_is_row_major() {
        let mut board = Board::new();
        board.set(0, 0, Some(Color::Cyan));
        board.set(10, 5, Some(Color::Purple));

        assert_eq!(board.cells[0], Some(Color::Cyan));
        assert_eq!(board.cells[10 * 10 + 5], Some(Color::Purple));
    }

    #[test]
    fn test_remove_filled_rows_keeps_grid_length() {
        let mut board = Board::new();
        board.fill_row(21, Color::Red);
        board.fill_row(20, Color::Red);
        let cleared = board.remove_filled_rows();
        assert_eq!(cleared.as_slice(), &[21, 20]);
        assert_eq!(board.cells.len(), BOARD_SIZE);
        assert!(board.cells.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_remove_filled_rows_every_row_full() {
        let mut board = Board::new();
        for row in 0..ROWS {
            board.fill_row(row, Color::Blue);
        }
        let cleared = board.remove_filled_rows();
        assert_eq!(cleared.len(), ROWS);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_lock_piece_writes_color() {
        let mut board = Board::new();
        let mut t = pieces::t_piece();
        t.move_to(19, 0);
        assert!(board.lock_piece(&t));
        assert_eq!(board.get(19, 1), Some(Some(Color::Purple)));
        assert_eq!(board.get(20, 0), Some(Some(Color::Purple)));
        assert_eq!(board.get(20, 1), Some(Some(Color::Purple)));
        assert_eq!(board.get(20, 2), Some(Some(Color::Purple)));
        assert_eq!(board.get(19, 0), Some(None));
    }

    #[test]
    fn test_lock_piece_refuses_overlap() {
        let mut board = Board::new();
        board.set(20, 1, Some(Color::Red));
        let mut t = pieces::t_piece();
        t.move_to(19, 0);
        assert!(!board.lock_piece(&t));
        assert_eq!(board.get(19, 1), Some(None));
    }

    #[test]
    fn test_rows_roundtrip() {
        let mut rows = [[None; COLUMNS]; ROWS];
        rows[5][3] = Some(Color::Yellow);
        rows[21][9] = Some(Color::Orange);
        let board = Board::from_rows(&rows);
        assert_eq!(board.to_rows(), rows);
    }
}
