//! Input management system
//!
//! Hosts translate hardware events into abstract keys of their choosing and feed
//! them here. Games then read the held set once per frame and drain presses as
//! discrete, edge-triggered events.

use std::collections::HashSet;
use std::hash::Hash;

/// Input manager
#[derive(Debug, Clone)]
pub struct InputManager<K> {
    held: HashSet<K>,
    pressed: Vec<K>,
}

impl<K: Copy + Eq + Hash> InputManager<K> {
    /// Create a new input manager
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: Vec::new(),
        }
    }

    /// Handle key input
    ///
    /// A press of a key that is already held is a repeat and does not queue
    /// another press event.
    pub fn handle_key_input(&mut self, key: K, pressed: bool) {
        if pressed {
            if self.held.insert(key) {
                self.pressed.push(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Iterate over held keys
    pub fn held(&self) -> impl Iterator<Item = &K> {
        self.held.iter()
    }

    /// Drain presses recorded since the last call, oldest first
    pub fn take_pressed(&mut self) -> Vec<K> {
        std::mem::take(&mut self.pressed)
    }
}

impl<K: Copy + Eq + Hash> Default for InputManager<K> {
    fn default() -> Self {
        Self::new()
    }
}
