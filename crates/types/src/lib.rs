//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the engine, the input controller and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 22 (indexed 0-21, top to bottom)
//! - **Hidden rows**: rows 0 and 1 exist in the model but are not drawn
//! - **Spawn position**: row 0, column 3 (top-left corner of the piece grid)
//!
//! # Timing Defaults
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `GRAVITY_COOLDOWN_MS` | 1000 | Time between forced descents |
//! | `MOVEMENT_COOLDOWN_MS` | 50 | Minimum gap between repeated moves |
//! | `ROTATION_COOLDOWN_MS` | 50 | Minimum gap between repeated rotations |
//! | `HARD_REPEAT_MS` | 500 | Hold time before a key auto-repeats |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{
//!     Color, GameStatus, PieceKind, RotationDirection, BOARD_COLUMNS, BOARD_ROWS,
//! };
//!
//! assert_eq!(PieceKind::T.color(), Color::Purple);
//! assert_eq!(PieceKind::I.size(), 4);
//! assert_eq!(RotationDirection::Left.step(0), 3);
//! assert_eq!(GameStatus::default(), GameStatus::NotRunning);
//!
//! assert_eq!(BOARD_COLUMNS, 10);
//! assert_eq!(BOARD_ROWS, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLUMNS: u8 = 10;

/// Board height in cells (22 rows, the top two hidden)
pub const BOARD_ROWS: u8 = 22;

/// Rows at the top of the board that the view does not draw
pub const HIDDEN_ROWS: u8 = 2;

/// Row of the piece grid's top-left corner when a piece spawns
pub const SPAWN_ROW: i8 = 0;

/// Column of the piece grid's top-left corner when a piece spawns
pub const SPAWN_COLUMN: i8 = 3;

/// Number of orientations every piece has
pub const ROTATIONS_PER_PIECE: usize = 4;

/// Number of minos in every piece
pub const MINOS_PER_PIECE: usize = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Time between forced descents of the current piece
pub const GRAVITY_COOLDOWN_MS: u32 = 1000;

/// Cooldown after a successful move before a held key may move again
pub const MOVEMENT_COOLDOWN_MS: u32 = 50;

/// Cooldown after a successful rotation before a held key may rotate again
pub const ROTATION_COOLDOWN_MS: u32 = 50;

/// Continuous hold time after which a tracked key counts as pressed again
pub const HARD_REPEAT_MS: u32 = 500;

/// Key-down timeout for terminals that never report key release events
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;


/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Color every piece of this kind is drawn and locked with
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }

    /// Side length of the square grid the kind's rotations live in
    pub fn size(&self) -> u8 {
        match self {
            PieceKind::I | PieceKind::O => 4,
            _ => 3,
        }
    }
}

/// Color of a piece, and of the cells it leaves behind when it locks
///
/// There is no "empty" variant: the empty sentinel of a board
/// cell is `None` (see [`Cell`]), so a piece color can never equal it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(Color)`: a piece locked here
pub type Cell = Option<Color>;

/// Direction of a quarter turn
///
/// Rotation indices run 0..4; turning `Right` increments, `Left` decrements,
/// both wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Left,
    Right,
}

impl RotationDirection {
    /// Rotation index reached by turning once from `index`
    pub fn step(&self, index: usize) -> usize {
        match self {
            RotationDirection::Right => (index + 1) % ROTATIONS_PER_PIECE,
            RotationDirection::Left => (index + ROTATIONS_PER_PIECE - 1) % ROTATIONS_PER_PIECE,
        }
    }
}

/// Lifecycle of a game session
///
/// `NotRunning --start--> Running --block-out--> GameOver`; `GameOver` stays
/// put until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotRunning,
    Running,
    GameOver,
}

/// Intents the controller forwards to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Quarter turn counter-clockwise
    RotateLeft,
    /// Quarter turn clockwise
    RotateRight,
    /// Drop to the landing row without locking (once per gravity cycle)
    SoftDrop,
    /// Drop to the landing row and lock immediately
    HardDrop,
    /// Start (or restart) a game
    NewGame,
}
