//! Game state module - the board engine
//!
//! Ties together the grid, the current and next pieces, the registered piece
//! factories, the RNG and the gravity timer. Every rule of play lives here:
//! collision, movement, rotation with a left/right nudge, gravity, locking,
//! row clearing, spawning and the session lifecycle.
//!
//! All checks run against a candidate (rotation, row, column) before the real
//! piece is touched, so a rejected action never leaves the piece in an illegal
//! spot.

use crate::board::Board;
use crate::piece::Piece;
use crate::pieces::{standard_factories, BlockFactory};
use crate::rng::SimpleRng;
use crate::rotation::Rotation;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Emitted when the current piece locks into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Rows removed by this lock
    pub rows_cleared: u32,
    /// The following piece had no room at spawn and the game ended
    pub blocked_out: bool,
}

/// Complete game state (the board engine)
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    factories: Vec<BlockFactory>,
    rng: SimpleRng,
    status: GameStatus,
    gravity_cooldown_ms: u32,
    /// Time left until the next forced descent. Negative after a stall
    /// longer than one cooldown; gravity then catches up one row per update.
    gravity_timer_ms: i64,
    /// One soft drop per gravity cycle; re-armed whenever gravity applies
    can_soft_drop: bool,
    /// Rows removed since the game started
    score: u32,
    pieces_locked: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a game with no registered factories, seeded for piece selection.
    ///
    /// Register factories with [`add_block_factory`](Self::add_block_factory)
    /// before [`start_game`](Self::start_game).
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            factories: Vec::new(),
            rng: SimpleRng::new(seed),
            status: GameStatus::NotRunning,
            gravity_cooldown_ms: GRAVITY_COOLDOWN_MS,
            gravity_timer_ms: GRAVITY_COOLDOWN_MS as i64,
            can_soft_drop: true,
            score: 0,
            pieces_locked: 0,
            last_event: None,
        }
    }

    /// Create a game with the seven standard pieces registered
    pub fn with_standard_pieces(seed: u32) -> Self {
        let mut state = Self::new(seed);
        for factory in standard_factories() {
            state.add_block_factory(factory);
        }
        state
    }

    /// Replace the piece-selection RNG
    pub fn with_rng(mut self, rng: SimpleRng) -> Self {
        self.rng = rng;
        self
    }

    /// Override the time between forced descents
    pub fn with_gravity_ms(mut self, gravity_ms: u32) -> Self {
        self.gravity_cooldown_ms = gravity_ms;
        self.gravity_timer_ms = gravity_ms as i64;
        self
    }

    /// Register a piece factory; new pieces are drawn uniformly from the list
    pub fn add_block_factory(&mut self, factory: BlockFactory) {
        self.factories.push(factory);
    }

    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct grid access, for setting up puzzles and test positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_block(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// Direct access to the current piece. No collision checks apply.
    pub fn current_block_mut(&mut self) -> Option<&mut Piece> {
        self.current.as_mut()
    }

    pub fn next_block(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn gravity_cooldown_ms(&self) -> u32 {
        self.gravity_cooldown_ms
    }

    /// Time left until the next forced descent, zero while gravity is behind
    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms.clamp(0, u32::MAX as i64) as u32
    }

    pub fn can_soft_drop(&self) -> bool {
        self.can_soft_drop
    }

    /// Color stored at (row, column), or `None` when out of range
    pub fn cell(&self, row: i8, column: i8) -> Option<Cell> {
        self.board.get(row, column)
    }

    /// Whether (row, column) blocks a piece; off-board cells always do
    pub fn is_cell_filled(&self, row: i8, column: i8) -> bool {
        self.board.is_cell_filled(row, column)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start a fresh game: empty grid, counters reset, first piece spawned.
    ///
    /// Also restarts a running or finished game. A pending next piece carries
    /// over.
    ///
    /// # Panics
    ///
    /// Panics if no factory has been registered.
    pub fn start_game(&mut self) {
        self.status = GameStatus::NotRunning;

        self.board.clear();
        self.current = None;
        self.score = 0;
        self.pieces_locked = 0;
        self.last_event = None;
        self.gravity_timer_ms = self.gravity_cooldown_ms as i64;
        self.can_soft_drop = true;

        if self.next.is_none() {
            self.next = Some(self.create_random_block());
        }

        self.status = GameStatus::Running;
        self.spawn_next();
    }

    /// Stop a running game. Grid and pieces stay as they are.
    pub fn end_game(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::NotRunning;
        true
    }

    /// Advance the gravity timer; applies gravity once when it runs out.
    ///
    /// Returns true if gravity applied this tick. Overshoot past zero is
    /// carried into the next cycle in full: after a stall of several
    /// cooldowns, each following update applies gravity until it has caught up.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_sub(elapsed_ms as i64);
        if self.gravity_timer_ms > 0 {
            return false;
        }

        self.apply_gravity();
        self.gravity_timer_ms += self.gravity_cooldown_ms as i64;
        true
    }

    /// Whether `rotation` placed with its top-left corner at (row, column)
    /// overlaps nothing: no filled cell, no wall, no floor.
    pub fn rotation_fits_at(&self, rotation: &Rotation, row: i8, column: i8) -> bool {
        let size = rotation.size() as i8;
        for r in 0..size {
            for c in 0..size {
                if rotation.is_cell_filled(r, c)
                    && self
                        .board
                        .is_cell_filled(row.saturating_add(r), column.saturating_add(c))
                {
                    return false;
                }
            }
        }
        true
    }

    /// Move the current piece one row down, or lock it if it cannot fall.
    ///
    /// Locking writes the piece into the grid, removes full rows and spawns the
    /// next piece (or ends the game on block-out). Either way soft drop is
    /// re-armed. Returns true if the piece fell.
    pub fn apply_gravity(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let below = piece.row().saturating_add(1);
        let fell = self.rotation_fits_at(piece.current_rotation(), below, piece.column());
        if fell {
            if let Some(current) = self.current.as_mut() {
                current.set_row(below);
            }
        } else {
            self.lock_current(&piece);
        }

        self.can_soft_drop = true;
        fell
    }

    fn lock_current(&mut self, piece: &Piece) {
        let locked = self.board.lock_piece(piece);
        debug_assert!(locked, "locked a piece that does not fit: {:?}", piece);

        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        let cleared = self.board.remove_filled_rows();
        self.score = self.score.wrapping_add(cleared.len() as u32);

        let spawned = self.spawn_next();
        self.last_event = Some(LockEvent {
            rows_cleared: cleared.len() as u32,
            blocked_out: !spawned,
        });
    }

    /// Promote the next piece to current if it fits at its spawn position,
    /// then draw a new next piece. Otherwise the game is over and the current
    /// piece stays as it was.
    fn spawn_next(&mut self) -> bool {
        let Some(next) = self.next else {
            return false;
        };

        if !self.rotation_fits_at(next.current_rotation(), next.row(), next.column()) {
            self.status = GameStatus::GameOver;
            return false;
        }

        self.current = Some(next);
        self.next = Some(self.create_random_block());
        true
    }

    fn create_random_block(&mut self) -> Piece {
        assert!(
            !self.factories.is_empty(),
            "no block factories registered; call add_block_factory before start_game"
        );
        let index = self.rng.next_index(self.factories.len());
        (self.factories[index])()
    }

    fn shift(&mut self, d_column: i8) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let column = piece.column().saturating_add(d_column);
        if !self.rotation_fits_at(piece.current_rotation(), piece.row(), column) {
            return false;
        }
        if let Some(current) = self.current.as_mut() {
            current.set_column(column);
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Turn the current piece, nudging it one column right or left if the
    /// turn does not fit in place.
    ///
    /// Candidates are tried in order: same column, column + 1, column - 1.
    /// The first that fits is committed. Returns false, leaving the piece
    /// alone, if none fits.
    pub fn rotate_current_block(&mut self, direction: RotationDirection) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let candidate = piece.next_rotation(direction);
        let row = piece.row();
        let column = piece.column();

        let Some(target) = [column, column.saturating_add(1), column.saturating_sub(1)]
            .into_iter()
            .find(|&c| self.rotation_fits_at(candidate, row, c))
        else {
            return false;
        };

        if let Some(current) = self.current.as_mut() {
            current.rotate(direction);
            current.set_column(target);
        }
        true
    }

    pub fn rotate_left(&mut self) -> bool {
        self.rotate_current_block(RotationDirection::Left)
    }

    pub fn rotate_right(&mut self) -> bool {
        self.rotate_current_block(RotationDirection::Right)
    }

    /// Lowest (row, column) the current piece can fall to in a straight line.
    pub fn find_drop_position(&self) -> Option<(i8, i8)> {
        let piece = self.current.as_ref()?;
        let rotation = piece.current_rotation();
        let column = piece.column();

        let mut row = piece.row();
        while row < BOARD_ROWS as i8
            && self.rotation_fits_at(rotation, row.saturating_add(1), column)
        {
            row += 1;
        }
        Some((row, column))
    }

    /// Drop the current piece to its landing row without locking it.
    ///
    /// Allowed once per gravity cycle; restarts the gravity timer so the
    /// player gets a full cooldown to slide the piece before it locks.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() || !self.can_soft_drop {
            return false;
        }
        let Some((row, column)) = self.find_drop_position() else {
            return false;
        };

        if let Some(current) = self.current.as_mut() {
            current.move_to(row, column);
        }
        self.gravity_timer_ms = self.gravity_cooldown_ms as i64;
        self.can_soft_drop = false;
        true
    }

    /// Drop the current piece to its landing row and lock it at once.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some((row, column)) = self.find_drop_position() else {
            return false;
        };

        if let Some(current) = self.current.as_mut() {
            current.move_to(row, column);
        }
        self.apply_gravity();
        true
    }

    /// Apply a controller intent
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateLeft => self.rotate_left(),
            GameAction::RotateRight => self.rotate_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::NewGame => {
                self.start_game();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_rows();
        out.active = self.current.as_ref().map(PieceSnapshot::from);
        out.ghost_row = self.find_drop_position().map(|(row, _)| row);
        out.next = self.next.as_ref().map(PieceSnapshot::from);
        out.status = self.status;
        out.score = self.score;
        out.pieces_locked = self.pieces_locked;
        out.gravity_timer_ms = self.gravity_timer_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_standard_pieces(1)
    }
}
