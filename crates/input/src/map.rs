//! Key mapping from terminal events to game keys.

use crate::keyboard::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key code to a game key.
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        // Movement
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::A),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::D),

        // Rotation
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),

        // Drops
        KeyCode::Down => Some(Key::Down),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Char(' ') => Some(Key::Space),

        // New game
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Key::N),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
