//! Cooldown-gated controller that drives a [`GameState`] from key snapshots.
//!
//! Bindings are fixed:
//!
//! | Key | Intent |
//! |-----|--------|
//! | `A` / `D` | move left / right |
//! | `←` / `→` | rotate left / right |
//! | `↓` / `S` | soft drop |
//! | `Space` / `↑` | hard drop |
//! | `N` | new game |
//!
//! Moves and rotations fire on a fresh press or after the key has been held
//! past the hard-repeat threshold, and only once their cooldown has run out.
//! A fresh press zeroes the cooldown so a tap always acts at once. Opposite
//! keys held together cancel. Drops and new game fire on the press edge only.

use arrayvec::ArrayVec;

use crate::core::GameState;
use crate::keyboard::{Key, KeySet, KeyboardState};
use crate::types::{GameAction, MOVEMENT_COOLDOWN_MS, ROTATION_COOLDOWN_MS};

/// Actions applied in one tick, in application order
pub type AppliedActions = ArrayVec<GameAction, 8>;

#[derive(Debug, Clone)]
pub struct Controller {
    keyboard: KeyboardState,
    movement_cooldown_ms: u32,
    rotation_cooldown_ms: u32,
    movement_timer_ms: u32,
    rotation_timer_ms: u32,
}

impl Controller {
    pub fn new() -> Self {
        Self::with_config(MOVEMENT_COOLDOWN_MS, ROTATION_COOLDOWN_MS)
    }

    pub fn with_config(movement_cooldown_ms: u32, rotation_cooldown_ms: u32) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            movement_cooldown_ms,
            rotation_cooldown_ms,
            movement_timer_ms: 0,
            rotation_timer_ms: 0,
        }
    }

    pub fn with_hard_repeat_ms(mut self, hard_repeat_ms: u32) -> Self {
        self.keyboard = KeyboardState::with_hard_repeat_ms(hard_repeat_ms);
        self
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    pub fn movement_timer_ms(&self) -> u32 {
        self.movement_timer_ms
    }

    pub fn rotation_timer_ms(&self) -> u32 {
        self.rotation_timer_ms
    }

    /// Process one tick of input against `game`.
    ///
    /// Returns the intents the game accepted. Rejected moves and rotations
    /// leave their cooldown untouched so the next tick may try again.
    pub fn update(
        &mut self,
        game: &mut GameState,
        keys: KeySet,
        elapsed_ms: u32,
    ) -> AppliedActions {
        let mut applied = AppliedActions::new();

        self.keyboard.update(keys, elapsed_ms);
        self.movement_timer_ms = self.movement_timer_ms.saturating_sub(elapsed_ms);
        self.rotation_timer_ms = self.rotation_timer_ms.saturating_sub(elapsed_ms);

        if self.keyboard.just_pressed(Key::A) || self.keyboard.just_pressed(Key::D) {
            self.movement_timer_ms = 0;
        }
        if self.keyboard.just_pressed(Key::Left) || self.keyboard.just_pressed(Key::Right) {
            self.rotation_timer_ms = 0;
        }

        if self.keyboard.just_pressed(Key::N) {
            game.start_game();
            let _ = applied.try_push(GameAction::NewGame);
        }

        if let Some(action) = self.pick(Key::A, Key::D, GameAction::MoveLeft, GameAction::MoveRight)
        {
            if self.movement_timer_ms == 0 && game.apply_action(action) {
                self.movement_timer_ms = self.movement_cooldown_ms;
                let _ = applied.try_push(action);
            }
        }

        if let Some(action) = self.pick(
            Key::Left,
            Key::Right,
            GameAction::RotateLeft,
            GameAction::RotateRight,
        ) {
            if self.rotation_timer_ms == 0 && game.apply_action(action) {
                self.rotation_timer_ms = self.rotation_cooldown_ms;
                let _ = applied.try_push(action);
            }
        }

        if (self.keyboard.just_pressed(Key::Down) || self.keyboard.just_pressed(Key::S))
            && game.soft_drop()
        {
            let _ = applied.try_push(GameAction::SoftDrop);
        }

        if (self.keyboard.just_pressed(Key::Space) || self.keyboard.just_pressed(Key::Up))
            && game.hard_drop()
        {
            let _ = applied.try_push(GameAction::HardDrop);
        }

        applied
    }

    /// Triggered action of an opposing key pair; none if both or neither are down.
    fn pick(
        &self,
        left: Key,
        right: Key,
        left_action: GameAction,
        right_action: GameAction,
    ) -> Option<GameAction> {
        match (self.keyboard.is_down(left), self.keyboard.is_down(right)) {
            (true, false) if self.keyboard.is_triggered(left) => Some(left_action),
            (false, true) if self.keyboard.is_triggered(right) => Some(right_action),
            _ => None,
        }
    }

    /// Forget key history and cooldowns
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.movement_timer_ms = 0;
        self.rotation_timer_ms = 0;
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
