//! Options Panel Descriptors
//!
//! Static description of every user option for the host's options panel,
//! and the setter the panel calls when the player changes one. Option ids are
//! the localisation keys of their labels.

use log::debug;

use super::snap_config::{ConfigError, SnapConfig, check_interval};
use crate::game::lang::option as keys;
use crate::input::{KeyCode, Toggle, ToggleMode};

/// Widget kind and range of an option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionKind {
    Checkbox,
    KeyBinding,
    ToggleMode,
    Slider { min: f32, max: f32, step: f32 },
}

/// A single entry in the options panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionEntry {
    /// Option id, also the label's localisation key
    pub id: &'static str,
    pub kind: OptionKind,
}

/// A value set from the options panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Key(KeyCode),
    Mode(ToggleMode),
    Number(f32),
}

impl OptionValue {
    fn kind_name(kind: &OptionKind) -> &'static str {
        match kind {
            OptionKind::Checkbox => "bool",
            OptionKind::KeyBinding => "key",
            OptionKind::ToggleMode => "mode",
            OptionKind::Slider { .. } => "number",
        }
    }
}

const GRID_SLIDER: OptionKind = OptionKind::Slider { min: 0.05, max: 1.0, step: 0.05 };
const ROTATION_SLIDER: OptionKind = OptionKind::Slider { min: 1.0, max: 90.0, step: 1.0 };
const FINE_ROTATION_SLIDER: OptionKind = OptionKind::Slider { min: 1.0, max: 45.0, step: 1.0 };

/// Every option, in panel order.
pub const OPTIONS: &[OptionEntry] = &[
    OptionEntry { id: keys::SNAPPING_ENABLED_BY_DEFAULT, kind: OptionKind::Checkbox },
    OptionEntry { id: keys::TOGGLE_SNAPPING_KEY, kind: OptionKind::KeyBinding },
    OptionEntry { id: keys::TOGGLE_SNAPPING_MODE, kind: OptionKind::ToggleMode },
    OptionEntry { id: keys::FINE_SNAPPING_KEY, kind: OptionKind::KeyBinding },
    OptionEntry { id: keys::FINE_SNAPPING_MODE, kind: OptionKind::ToggleMode },
    OptionEntry { id: keys::FINE_ROTATION_KEY, kind: OptionKind::KeyBinding },
    OptionEntry { id: keys::FINE_ROTATION_MODE, kind: OptionKind::ToggleMode },
    OptionEntry { id: keys::TOGGLE_ROTATION_KEY, kind: OptionKind::KeyBinding },
    OptionEntry { id: keys::TOGGLE_ROTATION_MODE, kind: OptionKind::ToggleMode },
    OptionEntry { id: keys::SNAP_ROUNDING, kind: GRID_SLIDER },
    OptionEntry { id: keys::FINE_SNAP_ROUNDING, kind: GRID_SLIDER },
    OptionEntry { id: keys::ROTATION_ROUNDING, kind: ROTATION_SLIDER },
    OptionEntry { id: keys::FINE_ROTATION_ROUNDING, kind: FINE_ROTATION_SLIDER },
];

/// Look up an option by id.
pub fn find_option(id: &str) -> Option<&'static OptionEntry> {
    OPTIONS.iter().find(|entry| entry.id == id)
}

impl SnapConfig {
    /// Apply a value from the options panel.
    ///
    /// Slider values outside the slider's range are rejected rather than
    /// clamped.
    pub fn apply_option(&mut self, id: &str, value: OptionValue) -> Result<(), ConfigError> {
        let entry = find_option(id).ok_or_else(|| ConfigError::UnknownOption(id.to_string()))?;
        let mismatch = || ConfigError::TypeMismatch {
            option: id.to_string(),
            expected: OptionValue::kind_name(&entry.kind),
        };

        match (entry.kind, value) {
            (OptionKind::Checkbox, OptionValue::Bool(on)) => {
                self.snapping.enabled_by_default = on;
            }
            (OptionKind::KeyBinding, OptionValue::Key(key)) => {
                self.toggle_for(id).ok_or_else(mismatch)?.key = key;
            }
            (OptionKind::ToggleMode, OptionValue::Mode(mode)) => {
                self.toggle_for(id).ok_or_else(mismatch)?.mode = mode;
            }
            (OptionKind::Slider { min, max, .. }, OptionValue::Number(n)) => {
                let field = self.interval_for(id).ok_or_else(mismatch)?;
                check_interval(entry.id, n, Some(max))?;
                if n < min {
                    return Err(ConfigError::InvalidInterval { field: entry.id, value: n });
                }
                *field = n;
            }
            _ => return Err(mismatch()),
        }

        debug!("option {id} set to {value:?}");
        Ok(())
    }

    fn toggle_for(&mut self, id: &str) -> Option<&mut Toggle> {
        match id {
            keys::TOGGLE_SNAPPING_KEY | keys::TOGGLE_SNAPPING_MODE => Some(&mut self.snapping),
            keys::FINE_SNAPPING_KEY | keys::FINE_SNAPPING_MODE => Some(&mut self.fine_snapping),
            keys::FINE_ROTATION_KEY | keys::FINE_ROTATION_MODE => Some(&mut self.fine_rotation),
            keys::TOGGLE_ROTATION_KEY | keys::TOGGLE_ROTATION_MODE => {
                Some(&mut self.toggle_rotation)
            }
            _ => None,
        }
    }

    fn interval_for(&mut self, id: &str) -> Option<&mut f32> {
        match id {
            keys::SNAP_ROUNDING => Some(&mut self.snap_rounding),
            keys::FINE_SNAP_ROUNDING => Some(&mut self.fine_snap_rounding),
            keys::ROTATION_ROUNDING => Some(&mut self.rotation_rounding),
            keys::FINE_ROTATION_ROUNDING => Some(&mut self.fine_rotation_rounding),
            _ => None,
        }
    }
}
