//! Polled keyboard state with edge detection and hold tracking.
//!
//! The controller does not consume events. Once per tick it receives the set
//! of keys currently down; comparing that with the previous tick's set gives
//! press and release edges, and counting how long a key stayed down gives the
//! hard-repeat signal.

use crate::types::HARD_REPEAT_MS;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    S,
    N,
    Left,
    Right,
    Up,
    Down,
    Space,
}

impl Key {
    pub const COUNT: usize = 9;

    pub const ALL: [Key; Key::COUNT] = [
        Key::A,
        Key::D,
        Key::S,
        Key::N,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Space,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn bit(self) -> u16 {
        1 << self.index()
    }
}

/// Set of keys held down at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeySet {
    bits: u16,
}

impl KeySet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn from_keys(keys: &[Key]) -> Self {
        let mut set = Self::empty();
        for &key in keys {
            set.insert(key);
        }
        set
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: Key) -> Self {
        self.insert(key);
        self
    }

    pub fn insert(&mut self, key: Key) {
        self.bits |= key.bit();
    }

    pub fn remove(&mut self, key: Key) {
        self.bits &= !key.bit();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = Self::empty();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// Previous and current key snapshots plus per-key hold durations
#[derive(Debug, Clone)]
pub struct KeyboardState {
    previous: KeySet,
    current: KeySet,
    /// Time each key has been down on consecutive snapshots
    held_ms: [u32; Key::COUNT],
    hard_repeat_ms: u32,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::with_hard_repeat_ms(HARD_REPEAT_MS)
    }

    pub fn with_hard_repeat_ms(hard_repeat_ms: u32) -> Self {
        Self {
            previous: KeySet::empty(),
            current: KeySet::empty(),
            held_ms: [0; Key::COUNT],
            hard_repeat_ms,
        }
    }

    pub fn hard_repeat_ms(&self) -> u32 {
        self.hard_repeat_ms
    }

    /// Take a new snapshot, `elapsed_ms` after the previous one.
    ///
    /// A key accumulates hold time only if it was down in both snapshots; a
    /// key that is up restarts at zero.
    pub fn update(&mut self, keys: KeySet, elapsed_ms: u32) {
        self.previous = self.current;
        self.current = keys;

        for key in Key::ALL {
            let held = &mut self.held_ms[key.index()];
            if !self.current.contains(key) {
                *held = 0;
            } else if self.previous.contains(key) {
                *held = held.saturating_add(elapsed_ms);
            }
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.current.contains(key)
    }

    pub fn was_down(&self, key: Key) -> bool {
        self.previous.contains(key)
    }

    /// Up on the previous snapshot, down on this one
    pub fn just_pressed(&self, key: Key) -> bool {
        !self.was_down(key) && self.is_down(key)
    }

    pub fn just_released(&self, key: Key) -> bool {
        self.was_down(key) && !self.is_down(key)
    }

    pub fn held_ms(&self, key: Key) -> u32 {
        self.held_ms[key.index()]
    }

    /// Held long enough to count as pressed again
    pub fn is_hard_repeating(&self, key: Key) -> bool {
        self.is_down(key) && self.held_ms(key) >= self.hard_repeat_ms
    }

    /// Just pressed, or held past the hard-repeat threshold
    pub fn is_triggered(&self, key: Key) -> bool {
        self.just_pressed(key) || self.is_hard_repeating(key)
    }

    pub fn current(&self) -> KeySet {
        self.current
    }

    pub fn reset(&mut self) {
        self.previous = KeySet::empty();
        self.current = KeySet::empty();
        self.held_ms = [0; Key::COUNT];
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_indices_are_distinct() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_key_set_basics() {
        let mut set = KeySet::from_keys(&[Key::A, Key::Space]);
        assert!(set.contains(Key::A));
        assert!(set.contains(Key::Space));
        assert!(!set.contains(Key::D));
        assert_eq!(set.len(), 2);

        set.remove(Key::A);
        assert!(!set.contains(Key::A));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Key::Space]);

        let collected: KeySet = [Key::Left, Key::Right].into_iter().collect();
        assert_eq!(collected, KeySet::empty().with(Key::Right).with(Key::Left));
        assert!(KeySet::default().is_empty());
    }

    #[test]
    fn test_edges() {
        let mut kb = KeyboardState::new();
        kb.update(KeySet::empty().with(Key::A), 16);
        assert!(kb.just_pressed(Key::A));
        assert!(!kb.just_released(Key::A));

        kb.update(KeySet::empty().with(Key::A), 16);
        assert!(!kb.just_pressed(Key::A));
        assert!(kb.is_down(Key::A));

        kb.update(KeySet::empty(), 16);
        assert!(kb.just_released(Key::A));
        assert!(!kb.is_down(Key::A));
    }

    #[test]
    fn test_hold_time_needs_consecutive_snapshots() {
        let mut kb = KeyboardState::new();
        kb.update(KeySet::empty().with(Key::D), 100);
        // The first snapshot with the key down does not count.
        assert_eq!(kb.held_ms(Key::D), 0);

        kb.update(KeySet::empty().with(Key::D), 100);
        kb.update(KeySet::empty().with(Key::D), 100);
        assert_eq!(kb.held_ms(Key::D), 200);

        kb.update(KeySet::empty(), 100);
        assert_eq!(kb.held_ms(Key::D), 0);
    }

    #[test]
    fn test_hard_repeat_threshold() {
        let mut kb = KeyboardState::with_hard_repeat_ms(50);
        let down = KeySet::empty().with(Key::Left);
        kb.update(down, 16);
        assert!(kb.is_triggered(Key::Left));
        assert!(!kb.is_hard_repeating(Key::Left));

        for _ in 0..3 {
            kb.update(down, 16);
        }
        assert_eq!(kb.held_ms(Key::Left), 48);
        assert!(!kb.is_triggered(Key::Left));

        kb.update(down, 16);
        assert!(kb.is_hard_repeating(Key::Left));
        assert!(kb.is_triggered(Key::Left));
    }

    #[test]
    fn test_reset_forgets_everything() {
        let mut kb = KeyboardState::new();
        kb.update(KeySet::empty().with(Key::N), 16);
        kb.update(KeySet::empty().with(Key::N), 16);
        kb.reset();
        assert!(!kb.is_down(Key::N));
        assert_eq!(kb.held_ms(Key::N), 0);
    }
}
