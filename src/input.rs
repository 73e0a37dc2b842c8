//! Keyboard input
//!
//! Key events only flip intent flags. The paddle moves once per frame in the
//! physics step, so input rate and frame rate stay independent.

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a host key identifier (`KeyboardEvent.key`) to a game key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" | "Right" => Some(Key::Right),
            "ArrowLeft" | "Left" => Some(Key::Left),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
}

/// Horizontal movement intent of the paddle.
///
/// Both flags may be set at once; the physics step checks `right` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn apply(&mut self, key: Key, action: KeyAction) {
        let held = action == KeyAction::Down;
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
        }
    }

    /// Apply a raw host key event. Unrecognized identifiers are ignored.
    /// Returns whether the event was consumed.
    pub fn handle_key(&mut self, name: &str, action: KeyAction) -> bool {
        match Key::from_key_name(name) {
            Some(key) => {
                self.apply(key, action);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
