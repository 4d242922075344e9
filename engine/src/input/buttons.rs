//! Button Input Port
//!
//! Host game actions the placement code polls, and the traits through which
//! it polls them. Game actions (`Button`) and raw keys (`KeyCode`) are polled
//! separately because the host resolves action bindings itself.

use super::KeyCode;

/// Host game actions relevant to placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Rotate the ghost clockwise
    RotateCw,
    /// Rotate the ghost counter-clockwise
    RotateCcw,
    /// Leave placement / holster the tool
    Exit,
}

/// Per-frame game action state supplied by the host.
pub trait ButtonInput {
    /// Whether the action is down this frame.
    fn is_held(&self, button: Button) -> bool;

    /// Seconds the action has been held, 0 when not held.
    fn held_time(&self, button: Button) -> f32;

    /// Whether the action went up this frame.
    fn is_released(&self, button: Button) -> bool;
}

/// Per-frame raw key state supplied by the host.
pub trait KeyInput {
    /// Whether the key went down this frame.
    fn key_down(&self, key: KeyCode) -> bool;

    /// Whether the key is down this frame.
    fn key_held(&self, key: KeyCode) -> bool;
}
