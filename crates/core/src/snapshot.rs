//! Snapshot module - plain copies of the game state for rendering

use crate::piece::Piece;
use crate::rotation::Rotation;
use crate::types::{Cell, Color, GameStatus, BOARD_COLUMNS, BOARD_ROWS};

/// A piece as the view needs it: shape, color and grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub rotation: Rotation,
    pub color: Color,
    pub row: i8,
    pub column: i8,
}

impl PieceSnapshot {
    /// Board coordinates `(row, column)` this piece covers
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (row, column) = (self.row, self.column);
        self.rotation
            .filled_cells()
            .map(move |(r, c)| (row + r, column + c))
    }
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            rotation: *value.current_rotation(),
            color: value.color(),
            row: value.row(),
            column: value.column(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
    pub active: Option<PieceSnapshot>,
    /// Landing row of the active piece
    pub ghost_row: Option<i8>,
    pub next: Option<PieceSnapshot>,
    pub status: GameStatus,
    pub score: u32,
    pub pieces_locked: u32,
    pub gravity_timer_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
            active: None,
            ghost_row: None,
            next: None,
            status: GameStatus::NotRunning,
            score: 0,
            pieces_locked: 0,
            gravity_timer_ms: 0,
        }
    }
}
