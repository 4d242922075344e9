//! Toggle Module
//!
//! A user option bound to a key that is either flipped by presses or active
//! only while the key is held.

use serde::{Deserialize, Serialize};

use super::{KeyCode, KeyInput};

/// How the bound key drives a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleMode {
    /// Each press flips the state
    Press,
    /// The state is inverted from its default while the key is held
    Hold,
}

/// A key-bound on/off option.
///
/// Only the binding and default are persisted; the live state is reset to
/// the default at the start of every placement session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    pub key: KeyCode,
    pub mode: ToggleMode,
    pub enabled_by_default: bool,
    #[serde(skip)]
    enabled: bool,
}

impl Toggle {
    pub fn new(key: KeyCode, mode: ToggleMode, enabled_by_default: bool) -> Self {
        Self {
            key,
            mode,
            enabled_by_default,
            enabled: enabled_by_default,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Return to the default state.
    pub fn reset(&mut self) {
        self.enabled = self.enabled_by_default;
    }

    /// Advance one frame of key input. Returns true if the state changed.
    pub fn update(&mut self, keys: &dyn KeyInput) -> bool {
        if !self.key.is_assigned() {
            return false;
        }
        let before = self.enabled;
        match self.mode {
            ToggleMode::Press => {
                if keys.key_down(self.key) {
                    self.enabled = !self.enabled;
                }
            }
            ToggleMode::Hold => {
                self.enabled = self.enabled_by_default != keys.key_held(self.key);
            }
        }
        before != self.enabled
    }
}
