//! Polled input snapshot.
//!
//! The simulation samples one `InputState` per tick instead of reacting
//! to key events, so a tick is a pure function of state and input.

use serde::{Deserialize, Serialize};

/// The fixed set of keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKey {
    Forward,
    Back,
    Left,
    Right,
    Fire,
}

impl InputKey {
    /// Map a DOM `KeyboardEvent.code`. Unknown codes map to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(InputKey::Forward),
            "KeyS" => Some(InputKey::Back),
            "KeyA" => Some(InputKey::Left),
            "KeyD" => Some(InputKey::Right),
            "Space" => Some(InputKey::Fire),
            _ => None,
        }
    }
}

/// Which keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Climb.
    pub forward: bool,
    /// Dive.
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputState {
    /// Build a snapshot from the codes of all held keys.
    pub fn from_key_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut state = Self::default();
        for key in codes.into_iter().filter_map(InputKey::from_code) {
            state.set(key, true);
        }
        state
    }

    pub fn set(&mut self, key: InputKey, held: bool) {
        match key {
            InputKey::Forward => self.forward = held,
            InputKey::Back => self.back = held,
            InputKey::Left => self.left = held,
            InputKey::Right => self.right = held,
            InputKey::Fire => self.fire = held,
        }
    }

    pub fn is_held(&self, key: InputKey) -> bool {
        match key {
            InputKey::Forward => self.forward,
            InputKey::Back => self.back,
            InputKey::Left => self.left,
            InputKey::Right => self.right,
            InputKey::Fire => self.fire,
        }
    }

    pub fn with(mut self, key: InputKey) -> Self {
        self.set(key, true);
        self
    }
}
