//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`rotation`]: One orientation of a piece as a set of filled offsets
//! - [`piece`]: A piece with four rotations and a grid position
//! - [`pieces`]: The seven standard tetrominoes and their factories
//! - [`board`]: 22x10 grid of locked cells with row clearing
//! - [`game_state`]: The engine: collision, movement, gravity, spawning
//! - [`rng`]: Seeded LCG used to pick the next piece
//! - [`snapshot`]: Copyable view of the game for renderers
//!
//! # Game Rules
//!
//! - **Uniform selection**: each new piece comes from a factory picked uniformly
//!   at random among the registered ones
//! - **Simple kick**: a rotation that does not fit is retried one column right,
//!   then one column left
//! - **Gravity**: every cooldown the piece falls one row, or locks if it cannot
//! - **Block-out**: the game ends when a freshly spawned piece overlaps the grid
//! - **Score**: one point per removed row
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameAction, GameStatus};
//!
//! let mut game = GameState::with_standard_pieces(12345);
//! game.start_game();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.status(), GameStatus::Running);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::update`](game_state::GameState::update) every frame with
//! the elapsed milliseconds; gravity fires once per
//! [`GRAVITY_COOLDOWN_MS`](types::GRAVITY_COOLDOWN_MS).

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{GameState, LockEvent};
pub use piece::Piece;
pub use pieces::BlockFactory;
pub use rng::SimpleRng;
pub use rotation::{MinoOffset, Rotation};
pub use snapshot::{GameSnapshot, PieceSnapshot};
