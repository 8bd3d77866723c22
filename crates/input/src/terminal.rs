//! Key-down snapshots from terminal key events.
//!
//! Terminals deliver events, the controller wants a polled "is this key down"
//! set. Press and repeat events mark a key down and release events mark it up.
//! Many terminals never send releases, so until the first release event is
//! seen a key also goes up on its own after a short timeout without fresh
//! press or repeat events.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::keyboard::{Key, KeySet};
use crate::map::key_from_code;
use crate::types::KEY_RELEASE_TIMEOUT_MS;

#[derive(Debug, Clone)]
pub struct TerminalKeys {
    down: KeySet,
    /// Time since the last press/repeat event per key
    idle_ms: [u32; Key::COUNT],
    release_timeout_ms: u32,
    release_events_seen: bool,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self {
            down: KeySet::empty(),
            idle_ms: [0; Key::COUNT],
            release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Trust release events from the start, as when the terminal accepted
    /// keyboard enhancement flags. Auto-release is then never applied.
    pub fn with_release_events(mut self, reported: bool) -> Self {
        self.release_events_seen = reported;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    /// Whether the terminal has reported a key release yet
    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    /// Feed one key event. Returns the game key it touched, if any.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Option<Key> {
        let key = key_from_code(event.code)?;
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.down.insert(key);
                self.idle_ms[key.index()] = 0;
            }
            KeyEventKind::Release => {
                self.release_events_seen = true;
                self.down.remove(key);
            }
        }
        Some(key)
    }

    /// Advance by `elapsed_ms` and return the keys down now.
    pub fn snapshot(&mut self, elapsed_ms: u32) -> KeySet {
        if !self.release_events_seen {
            for key in Key::ALL {
                if !self.down.contains(key) {
                    continue;
                }
                let idle = &mut self.idle_ms[key.index()];
                *idle = idle.saturating_add(elapsed_ms);
                if *idle > self.release_timeout_ms {
                    self.down.remove(key);
                }
            }
        }
        self.down
    }

    pub fn down(&self) -> KeySet {
        self.down
    }

    /// Release everything, e.g. after the window lost focus
    pub fn clear(&mut self) {
        self.down = KeySet::empty();
        self.idle_ms = [0; Key::COUNT];
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new()
    }
}
