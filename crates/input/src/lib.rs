//! Keyboard input module (engine-facing).
//!
//! This module is independent of any UI framework. It turns `crossterm` key
//! events into polled key-down snapshots ([`TerminalKeys`]), tracks press
//! edges and hold times between snapshots ([`KeyboardState`]), and drives a
//! [`core::GameState`] through cooldown-gated intents ([`Controller`]).

pub mod controller;
pub mod keyboard;
pub mod map;
pub mod terminal;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use controller::{AppliedActions, Controller};
pub use keyboard::{Key, KeySet, KeyboardState};
pub use map::{key_from_code, should_quit};
pub use terminal::TerminalKeys;
