use std::collections::HashMap;

use super::types::{Key, KeyState};

/// Current and previous key state.
///
/// `snapshot` copies the current table into the previous one; it runs once
/// per frame just before new events are applied, so the previous table is
/// always exactly one frame behind. Keys never seen are `Up`.
#[derive(Debug, Default, Clone)]
pub struct KeyTable {
    current: HashMap<Key, KeyState>,
    previous: HashMap<Key, KeyState>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, state: KeyState) {
        self.current.insert(key, state);
    }

    pub fn snapshot(&mut self) {
        self.previous.clone_from(&self.current);
    }

    /// Releases every key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        for state in self.current.values_mut() {
            *state = KeyState::Up;
        }
    }

    pub fn current(&self, key: Key) -> KeyState {
        self.current.get(&key).copied().unwrap_or_default()
    }

    pub fn previous(&self, key: Key) -> KeyState {
        self.previous.get(&key).copied().unwrap_or_default()
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.current(key) == KeyState::Down
    }

    pub fn is_key_up(&self, key: Key) -> bool {
        self.current(key) == KeyState::Up
    }

    /// Tap signal: down in the previous snapshot, up now.
    ///
    /// This fires on the frame the key is let go, not the frame it goes
    /// down. Every binding in the viewer relies on that polarity.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.previous(key) == KeyState::Down && self.current(key) == KeyState::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_keys_are_up() {
        let table = KeyTable::new();
        assert!(table.is_key_up(Key::W));
        assert!(!table.is_key_down(Key::W));
        assert!(!table.is_key_pressed(Key::W));
    }

    #[test]
    fn snapshot_copies_current_into_previous() {
        let mut table = KeyTable::new();
        table.set(Key::A, KeyState::Down);
        table.set(Key::B, KeyState::Up);
        table.snapshot();

        assert_eq!(table.previous(Key::A), KeyState::Down);
        assert_eq!(table.previous(Key::B), KeyState::Up);

        table.set(Key::A, KeyState::Up);
        assert_eq!(table.previous(Key::A), KeyState::Down);
        table.snapshot();
        assert_eq!(table.previous(Key::A), KeyState::Up);
    }

    #[test]
    fn pressed_fires_once_per_press_release_cycle() {
        let mut table = KeyTable::new();
        let mut fired = 0;

        // Frame 1: key goes down.
        table.set(Key::Tab, KeyState::Down);
        fired += table.is_key_pressed(Key::Tab) as u32;
        table.snapshot();

        // Frames 2..4: key held.
        for _ in 0..3 {
            fired += table.is_key_pressed(Key::Tab) as u32;
            table.snapshot();
        }

        // Frame 5: released.
        table.set(Key::Tab, KeyState::Up);
        assert!(table.is_key_pressed(Key::Tab));
        fired += 1;
        table.snapshot();

        // Frame 6: still up, no second edge.
        assert!(!table.is_key_pressed(Key::Tab));
        assert_eq!(fired, 1);
    }

    #[test]
    fn press_and_release_within_one_frame_produces_no_edge() {
        let mut table = KeyTable::new();
        table.snapshot();
        table.set(Key::T, KeyState::Down);
        table.set(Key::T, KeyState::Up);
        assert!(!table.is_key_pressed(Key::T));
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut table = KeyTable::new();
        table.set(Key::W, KeyState::Down);
        table.set(Key::D, KeyState::Down);
        table.release_all();
        assert!(table.is_key_up(Key::W));
        assert!(table.is_key_up(Key::D));
    }
}
