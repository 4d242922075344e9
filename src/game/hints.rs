//! Placement Hints
//!
//! Text lines shown when placement starts, telling the player which keys
//! drive the snapping toggles.

use super::config::SnapConfig;
use super::lang::{Lang, NO_INPUT_ASSIGNED, hint};
use crate::input::{Toggle, ToggleMode};

/// Where hint lines go, e.g. the host's message feed.
pub trait HintSink {
    fn show(&mut self, message: &str);
}

impl HintSink for Vec<String> {
    fn show(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Display text for a toggle's binding, e.g. `Left Ctrl (Hold)`.
pub fn format_button(lang: &Lang, toggle: &Toggle) -> String {
    let name = match toggle.key.display_name() {
        Some(name) => name,
        None => lang.get(NO_INPUT_ASSIGNED),
    };
    match toggle.mode {
        ToggleMode::Hold => format!("{name} (Hold)"),
        ToggleMode::Press => name.to_string(),
    }
}

fn hint_line(lang: &Lang, key: &str, button: &str) -> String {
    format!("{} ({button})", lang.get(key))
}

/// Snapping and fine snapping lines.
pub fn snapping_hints(lang: &Lang, config: &SnapConfig) -> [String; 2] {
    [
        hint_line(lang, hint::TOGGLE_SNAPPING, &format_button(lang, &config.snapping)),
        hint_line(lang, hint::TOGGLE_FINE_SNAPPING, &format_button(lang, &config.fine_snapping)),
    ]
}

pub fn fine_rotation_hint(lang: &Lang, config: &SnapConfig) -> String {
    hint_line(lang, hint::TOGGLE_FINE_ROTATION, &format_button(lang, &config.fine_rotation))
}

pub fn toggle_rotation_hint(lang: &Lang, config: &SnapConfig) -> String {
    hint_line(lang, hint::TOGGLE_ROTATION, &format_button(lang, &config.toggle_rotation))
}

/// Holster line; the exit action is bound by the host, so its label is
/// passed in.
pub fn holster_hint(lang: &Lang, exit_label: &str) -> String {
    hint_line(lang, hint::HOLSTER_ITEM, exit_label)
}
