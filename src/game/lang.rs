//! Localisation
//!
//! String keys for hints and option labels, the English table, and a lookup
//! that hosts can extend with their own translations.

use std::collections::HashMap;

/// Shown in place of a key name when nothing is bound.
pub const NO_INPUT_ASSIGNED: &str = "NoInputAssigned";

/// On-screen hint keys.
pub mod hint {
    pub const TOGGLE_SNAPPING: &str = "GhostToggleSnappingHint";
    pub const TOGGLE_FINE_SNAPPING: &str = "GhostToggleFineSnappingHint";
    pub const TOGGLE_ROTATION: &str = "GhostToggleRotationHint";
    pub const TOGGLE_FINE_ROTATION: &str = "GhostToggleFineRotationHint";
    pub const HOLSTER_ITEM: &str = "GhostHolsterItemHint";
}

/// Option label keys, also used as option ids.
pub mod option {
    pub const SNAPPING_ENABLED_BY_DEFAULT: &str = "Options.SnappingEnabledByDefault";
    pub const TOGGLE_SNAPPING_KEY: &str = "Options.ToggleSnappingKey";
    pub const TOGGLE_SNAPPING_MODE: &str = "Options.ToggleSnappingMode";
    pub const FINE_SNAPPING_KEY: &str = "Options.FineSnappingKey";
    pub const FINE_SNAPPING_MODE: &str = "Options.FineSnappingMode";
    pub const FINE_ROTATION_KEY: &str = "Options.FineRotationKey";
    pub const FINE_ROTATION_MODE: &str = "Options.FineRotationMode";
    pub const TOGGLE_ROTATION_KEY: &str = "Options.ToggleRotationKey";
    pub const TOGGLE_ROTATION_MODE: &str = "Options.ToggleRotationMode";
    pub const SNAP_ROUNDING: &str = "Options.SnapRounding";
    pub const FINE_SNAP_ROUNDING: &str = "Options.FineSnapRounding";
    pub const ROTATION_ROUNDING: &str = "Options.RotationRounding";
    pub const FINE_ROTATION_ROUNDING: &str = "Options.FineRotationRounding";
}

const ENGLISH: &[(&str, &str)] = &[
    (hint::TOGGLE_SNAPPING, "Toggle snapping"),
    (hint::TOGGLE_FINE_SNAPPING, "Toggle fine snapping"),
    (hint::TOGGLE_ROTATION, "Toggle rotation"),
    (hint::TOGGLE_FINE_ROTATION, "Toggle fine rotation"),
    (hint::HOLSTER_ITEM, "Holster item"),
    (option::SNAPPING_ENABLED_BY_DEFAULT, "Snapping enabled by default"),
    (option::TOGGLE_SNAPPING_KEY, "Toggle snapping button"),
    (option::TOGGLE_SNAPPING_MODE, "Toggle snapping mode"),
    (option::FINE_SNAPPING_KEY, "Fine snapping button"),
    (option::FINE_SNAPPING_MODE, "Fine snapping mode"),
    (option::FINE_ROTATION_KEY, "Fine rotation button"),
    (option::FINE_ROTATION_MODE, "Fine rotation mode"),
    (option::TOGGLE_ROTATION_KEY, "Toggle rotation button (for placeable items)"),
    (option::TOGGLE_ROTATION_MODE, "Toggle rotation mode (for placeable items)"),
    (option::SNAP_ROUNDING, "Snap rounding"),
    (option::FINE_SNAP_ROUNDING, "Fine snap rounding"),
    (option::ROTATION_ROUNDING, "Rotation rounding (degrees)"),
    (option::FINE_ROTATION_ROUNDING, "Fine rotation rounding (degrees)"),
    (NO_INPUT_ASSIGNED, "No input assigned"),
];

/// Key → display string table.
#[derive(Debug, Clone, Default)]
pub struct Lang {
    strings: HashMap<String, String>,
}

impl Lang {
    /// Table with the built-in English strings.
    pub fn english() -> Self {
        let mut lang = Self::default();
        lang.extend(ENGLISH.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        lang
    }

    /// Add or replace strings, e.g. a host-provided translation.
    pub fn extend(&mut self, strings: impl IntoIterator<Item = (String, String)>) {
        self.strings.extend(strings);
    }

    /// String for `key`, or the key itself if it has none.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map_or(key, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
