//! Piece module - a tetromino with its four rotations and board position
//!
//! A piece never checks collisions itself. [`GameState`](crate::GameState)
//! tests a candidate rotation/position first and only then mutates the piece.

use crate::rotation::Rotation;
use crate::types::{Color, RotationDirection, ROTATIONS_PER_PIECE, SPAWN_COLUMN, SPAWN_ROW};

/// A falling (or previewed) piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    size: u8,
    rotations: [Rotation; ROTATIONS_PER_PIECE],
    rotation_index: usize,
    /// Board row of the rotation grid's top-left corner
    row: i8,
    /// Board column of the rotation grid's top-left corner
    column: i8,
}

impl Piece {
    /// Create a piece in its first rotation at the spawn position.
    ///
    /// # Panics
    ///
    /// Panics if any rotation's size differs from `size`.
    pub fn new(color: Color, size: u8, rotations: [Rotation; ROTATIONS_PER_PIECE]) -> Self {
        for (i, rotation) in rotations.iter().enumerate() {
            assert_eq!(
                rotation.size(),
                size,
                "rotation {} has size {} but the piece has size {}",
                i,
                rotation.size(),
                size
            );
        }

        Self {
            color,
            size,
            rotations,
            rotation_index: 0,
            row: SPAWN_ROW,
            column: SPAWN_COLUMN,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn rotations(&self) -> &[Rotation; ROTATIONS_PER_PIECE] {
        &self.rotations
    }

    pub fn rotation_index(&self) -> usize {
        self.rotation_index
    }

    pub fn current_rotation(&self) -> &Rotation {
        &self.rotations[self.rotation_index]
    }

    /// Rotation one quarter turn away, without changing the piece
    pub fn next_rotation(&self, direction: RotationDirection) -> &Rotation {
        &self.rotations[direction.step(self.rotation_index)]
    }

    /// Turn one step in `direction` (unchecked)
    pub fn rotate(&mut self, direction: RotationDirection) {
        self.rotation_index = direction.step(self.rotation_index);
    }

    pub fn rotate_left(&mut self) {
        self.rotate(RotationDirection::Left);
    }

    pub fn rotate_right(&mut self) {
        self.rotate(RotationDirection::Right);
    }

    /// Whether `(row, column)` of the current rotation grid is filled
    pub fn is_cell_filled(&self, row: i8, column: i8) -> bool {
        self.current_rotation().is_cell_filled(row, column)
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn column(&self) -> i8 {
        self.column
    }

    /// `(row, column)` of the rotation grid's top-left corner
    pub fn position(&self) -> (i8, i8) {
        (self.row, self.column)
    }

    pub fn set_row(&mut self, row: i8) {
        self.row = row;
    }

    pub fn set_column(&mut self, column: i8) {
        self.column = column;
    }

    pub fn move_to(&mut self, row: i8, column: i8) {
        self.row = row;
        self.column = column;
    }

    /// Board coordinates `(row, column)` covered by the current rotation
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (row, column) = (self.row, self.column);
        self.current_rotation()
            .filled_cells()
            .map(move |(r, c)| (row + r, column + c))
    }
}
