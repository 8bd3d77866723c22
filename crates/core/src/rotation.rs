//! Rotation module - one orientation of a piece
//!
//! A rotation is the set of 4 filled cells inside a square `size x size` grid.
//! Offsets are stored as `(column, row)` pairs relative to the grid's top-left
//! corner; that pair is the identity of a filled cell.

use crate::types::MINOS_PER_PIECE;

/// Offset of a single mino inside the rotation grid: `(column, row)`
pub type MinoOffset = (i8, i8);

/// Immutable filled-cell set for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    size: u8,
    cells: [MinoOffset; MINOS_PER_PIECE],
}

impl Rotation {
    /// Build a rotation from `(column, row)` offsets.
    ///
    /// # Panics
    ///
    /// Panics unless `size` is 3 or 4 and `cells` holds exactly 4 distinct
    /// offsets inside `[0, size)`. Rotations are authored as static tables, so
    /// a bad one is a programming error.
    pub fn new(size: u8, cells: &[MinoOffset]) -> Self {
        assert!(size == 3 || size == 4, "rotation size must be 3 or 4, got {}", size);
        assert_eq!(
            cells.len(),
            MINOS_PER_PIECE,
            "a rotation has exactly {} filled cells",
            MINOS_PER_PIECE
        );

        let mut out = [(0, 0); MINOS_PER_PIECE];
        for (i, &(column, row)) in cells.iter().enumerate() {
            assert!(
                column >= 0 && (column as u8) < size && row >= 0 && (row as u8) < size,
                "cell ({}, {}) outside a {}x{} rotation",
                column,
                row,
                size,
                size
            );
            assert!(
                !out[..i].contains(&(column, row)),
                "duplicate cell ({}, {})",
                column,
                row
            );
            out[i] = (column, row);
        }

        Self { size, cells: out }
    }

    /// Side length of the rotation grid
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The 4 filled offsets as `(column, row)` pairs, in authoring order
    pub fn cells(&self) -> &[MinoOffset; MINOS_PER_PIECE] {
        &self.cells
    }

    /// True iff `(row, column)` is one of the filled cells.
    ///
    /// Coordinates outside the grid (negative or `>= size`) are simply not
    /// filled.
    #[inline]
    pub fn is_cell_filled(&self, row: i8, column: i8) -> bool {
        self.cells.contains(&(column, row))
    }

    /// Filled cells as `(row, column)` pairs
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.cells.iter().map(|&(column, row)| (row, column))
    }
}
