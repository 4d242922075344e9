//! Input Recorder
//!
//! Scriptable in-memory input implementing [`ButtonInput`] and [`KeyInput`].
//! Edge events (key down, button released) last until the next
//! [`advance`](InputRecorder::advance), mirroring a host that samples input
//! once per frame.

use std::collections::{HashMap, HashSet};

use super::{Button, ButtonInput, KeyCode, KeyInput};

#[derive(Debug, Clone, Default)]
pub struct InputRecorder {
    /// Seconds since the recorder was created
    now: f32,
    /// Held buttons and the time they went down
    buttons_held: HashMap<Button, f32>,
    buttons_released: HashSet<Button>,
    keys_held: HashSet<KeyCode>,
    keys_down: HashSet<KeyCode>,
}

impl InputRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock in seconds.
    pub fn now(&self) -> f32 {
        self.now
    }

    /// Move to the next frame, `dt` seconds later. Clears edge events.
    pub fn advance(&mut self, dt: f32) {
        self.now += dt.max(0.0);
        self.buttons_released.clear();
        self.keys_down.clear();
    }

    pub fn press(&mut self, button: Button) {
        let now = self.now;
        self.buttons_held.entry(button).or_insert(now);
    }

    pub fn release(&mut self, button: Button) {
        if self.buttons_held.remove(&button).is_some() {
            self.buttons_released.insert(button);
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_down.insert(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    /// Release everything without producing release edges.
    pub fn reset(&mut self) {
        self.buttons_held.clear();
        self.buttons_released.clear();
        self.keys_held.clear();
        self.keys_down.clear();
    }
}

impl ButtonInput for InputRecorder {
    fn is_held(&self, button: Button) -> bool {
        self.buttons_held.contains_key(&button)
    }

    fn held_time(&self, button: Button) -> f32 {
        self.buttons_held.get(&button).map_or(0.0, |start| self.now - start)
    }

    fn is_released(&self, button: Button) -> bool {
        self.buttons_released.contains(&button)
    }
}

impl KeyInput for InputRecorder {
    fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }
}
