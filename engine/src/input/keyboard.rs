//! Keyboard Input Module
//!
//! Generic key codes for user-bindable toggles, independent of the host's
//! own input enum.

use serde::{Deserialize, Serialize};

/// Generic key codes for toggle bindings.
///
/// Mouse buttons are included because the host lets them be bound to the
/// same options as keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// No key assigned
    #[default]
    None,

    // Letter keys
    B,
    C,
    E,
    F,
    G,
    Q,
    R,
    T,
    V,
    X,
    Z,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Control keys
    Space,
    Tab,
    CapsLock,
    Escape,

    // Mouse buttons
    Mouse0,
    Mouse1,
    Mouse2,
    Mouse3,
    Mouse4,
}

impl KeyCode {
    /// Whether a key is actually bound.
    pub fn is_assigned(&self) -> bool {
        *self != KeyCode::None
    }

    /// Label shown to the player in hints and option panels.
    ///
    /// `None` has no label; callers substitute a localized "no input" text.
    pub fn display_name(&self) -> Option<&'static str> {
        let name = match self {
            KeyCode::None => return None,
            KeyCode::B => "B",
            KeyCode::C => "C",
            KeyCode::E => "E",
            KeyCode::F => "F",
            KeyCode::G => "G",
            KeyCode::Q => "Q",
            KeyCode::R => "R",
            KeyCode::T => "T",
            KeyCode::V => "V",
            KeyCode::X => "X",
            KeyCode::Z => "Z",
            KeyCode::ShiftLeft => "Left Shift",
            KeyCode::ShiftRight => "Right Shift",
            KeyCode::ControlLeft => "Left Ctrl",
            KeyCode::ControlRight => "Right Ctrl",
            KeyCode::AltLeft => "Left Alt",
            KeyCode::AltRight => "Right Alt",
            KeyCode::Space => "Space",
            KeyCode::Tab => "Tab",
            KeyCode::CapsLock => "Caps Lock",
            KeyCode::Escape => "Esc",
            KeyCode::Mouse0 => "Left Mouse",
            KeyCode::Mouse1 => "Right Mouse",
            KeyCode::Mouse2 => "Middle Mouse",
            KeyCode::Mouse3 => "Mouse 4",
            KeyCode::Mouse4 => "Mouse 5",
        };
        Some(name)
    }
}
