//! Snap Configuration
//!
//! User options for grid and rotation snapping, persisted as JSON at a path
//! the host chooses. Missing fields fall back to defaults so older files keep
//! loading.

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::input::{KeyCode, KeyInput, Toggle, ToggleMode};

/// Default coarse grid interval in meters.
pub const DEFAULT_SNAP_ROUNDING: f32 = 0.5;
/// Default fine grid setting in meters (the effective fine grid is half).
pub const DEFAULT_FINE_SNAP_ROUNDING: f32 = 0.2;
/// Default coarse rotation step in degrees.
pub const DEFAULT_ROTATION_ROUNDING: f32 = 45.0;
/// Default fine rotation step in degrees.
pub const DEFAULT_FINE_ROTATION_ROUNDING: f32 = 5.0;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors from loading, saving or editing the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// A rounding interval is not usable.
    InvalidInterval { field: &'static str, value: f32 },
    /// No option has this id.
    UnknownOption(String),
    /// The value kind does not match the option.
    TypeMismatch { option: String, expected: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::InvalidInterval { field, value } => {
                write!(f, "invalid interval for {field}: {value}")
            }
            ConfigError::UnknownOption(id) => write!(f, "unknown option: {id}"),
            ConfigError::TypeMismatch { option, expected } => {
                write!(f, "option {option} expects a {expected} value")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Snapping options.
///
/// The algorithms only read this; toggles change through
/// [`update_toggles`](SnapConfig::update_toggles) and values through
/// [`apply_option`](SnapConfig::apply_option).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Master switch for grid and rotation snapping
    pub snapping: Toggle,
    /// Use the fine grid while enabled
    pub fine_snapping: Toggle,
    /// Use the fine rotation step while enabled
    pub fine_rotation: Toggle,
    /// Rotation on/off for hand-placed items
    pub toggle_rotation: Toggle,
    /// Coarse grid interval (meters)
    pub snap_rounding: f32,
    /// Fine grid setting (meters); halved when applied
    pub fine_snap_rounding: f32,
    /// Coarse rotation step (degrees)
    pub rotation_rounding: f32,
    /// Fine rotation step (degrees)
    pub fine_rotation_rounding: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            snapping: Toggle::new(KeyCode::Mouse2, ToggleMode::Press, true),
            fine_snapping: Toggle::new(KeyCode::ControlLeft, ToggleMode::Hold, false),
            fine_rotation: Toggle::new(KeyCode::AltLeft, ToggleMode::Hold, false),
            toggle_rotation: Toggle::new(KeyCode::Q, ToggleMode::Press, false),
            snap_rounding: DEFAULT_SNAP_ROUNDING,
            fine_snap_rounding: DEFAULT_FINE_SNAP_ROUNDING,
            rotation_rounding: DEFAULT_ROTATION_ROUNDING,
            fine_rotation_rounding: DEFAULT_FINE_ROTATION_ROUNDING,
        }
    }
}

impl SnapConfig {
    /// Grid interval currently in effect.
    pub fn grid_interval(&self) -> f32 {
        if self.fine_snapping.enabled() {
            self.fine_snap_rounding / 2.0
        } else {
            self.snap_rounding
        }
    }

    /// Rotation step currently in effect, in degrees.
    pub fn rotation_interval(&self) -> f32 {
        if self.fine_rotation.enabled() {
            self.fine_rotation_rounding
        } else {
            self.rotation_rounding
        }
    }

    /// Return every toggle to its default state.
    pub fn reset_toggles(&mut self) {
        self.snapping.reset();
        self.fine_snapping.reset();
        self.fine_rotation.reset();
        self.toggle_rotation.reset();
    }

    /// Feed one frame of key input to every toggle.
    pub fn update_toggles(&mut self, keys: &dyn KeyInput) {
        for (name, toggle) in [
            ("snapping", &mut self.snapping),
            ("fine_snapping", &mut self.fine_snapping),
            ("fine_rotation", &mut self.fine_rotation),
            ("toggle_rotation", &mut self.toggle_rotation),
        ] {
            if toggle.update(keys) {
                debug!("{name} toggled {}", if toggle.enabled() { "on" } else { "off" });
            }
        }
    }

    /// Check every interval is finite and positive, and rotation steps do
    /// not exceed a full turn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_interval("snap_rounding", self.snap_rounding, None)?;
        check_interval("fine_snap_rounding", self.fine_snap_rounding, None)?;
        check_interval("rotation_rounding", self.rotation_rounding, Some(360.0))?;
        check_interval("fine_rotation_rounding", self.fine_rotation_rounding, Some(360.0))?;
        Ok(())
    }

    /// Parse and validate JSON. Toggles start in their default state.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: SnapConfig = serde_json::from_str(json)?;
        config.validate()?;
        config.reset_toggles();
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load from `path`, falling back to defaults if the file is missing or
    /// unusable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("failed to load config from {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}

pub(crate) fn check_interval(
    field: &'static str,
    value: f32,
    max: Option<f32>,
) -> Result<(), ConfigError> {
    let in_range = value.is_finite() && value > 0.0 && max.is_none_or(|m| value <= m);
    if in_range {
        Ok(())
    } else {
        Err(ConfigError::InvalidInterval { field, value })
    }
}

static_assertions::assert_impl_all!(SnapConfig: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputRecorder;

    #[test]
    fn test_default_config() {
        let config = SnapConfig::default();
        assert!(config.snapping.enabled());
        assert!(!config.fine_snapping.enabled());
        assert_eq!(config.grid_interval(), DEFAULT_SNAP_ROUNDING);
        assert_eq!(config.rotation_interval(), DEFAULT_ROTATION_ROUNDING);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fine_snapping_halves_fine_setting() {
        let mut config = SnapConfig::default();
        config.fine_snapping.set_enabled(true);
        assert!((config.grid_interval() - 0.1).abs() < 1e-6);
        config.fine_snap_rounding = 0.5;
        assert!((config.grid_interval() - 0.25).abs() < 1e-6);
        config.fine_snapping.set_enabled(false);
        assert_eq!(config.grid_interval(), config.snap_rounding);
    }

    #[test]
    fn test_fine_rotation_interval() {
        let mut config = SnapConfig::default();
        config.fine_rotation.set_enabled(true);
        assert_eq!(config.rotation_interval(), DEFAULT_FINE_ROTATION_ROUNDING);
    }

    #[test]
    fn test_update_and_reset_toggles() {
        let mut config = SnapConfig::default();
        let mut input = InputRecorder::new();
        input.press_key(KeyCode::ControlLeft);
        input.press_key(KeyCode::Mouse2);
        config.update_toggles(&input);
        assert!(config.fine_snapping.enabled());
        assert!(!config.snapping.enabled());

        config.reset_toggles();
        assert!(!config.fine_snapping.enabled());
        assert!(config.snapping.enabled());
    }

    #[test]
    fn test_validate_rejects_bad_intervals() {
        let mut config = SnapConfig::default();
        config.snap_rounding = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInterval { field: "snap_rounding", .. })
        ));

        let mut config = SnapConfig::default();
        config.rotation_rounding = 400.0;
        assert!(config.validate().is_err());

        let mut config = SnapConfig::default();
        config.fine_snap_rounding = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SnapConfig::from_json(r#"{ "snap_rounding": 1.0 }"#).unwrap();
        assert_eq!(config.snap_rounding, 1.0);
        assert_eq!(config.rotation_rounding, DEFAULT_ROTATION_ROUNDING);
        assert_eq!(config.fine_snapping.key, KeyCode::ControlLeft);
    }

    #[test]
    fn test_json_toggle_default_applies_on_load() {
        let json = r#"{ "snapping": { "key": "Q", "mode": "Hold", "enabled_by_default": false } }"#;
        let config = SnapConfig::from_json(json).unwrap();
        assert_eq!(config.snapping.key, KeyCode::Q);
        assert_eq!(config.snapping.mode, ToggleMode::Hold);
        assert!(!config.snapping.enabled());
    }

    #[test]
    fn test_invalid_json_errors() {
        assert!(matches!(SnapConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
        assert!(matches!(
            SnapConfig::from_json(r#"{ "rotation_rounding": -5.0 }"#),
            Err(ConfigError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("snap_builder_cfg_{}", std::process::id()));
        let path = dir.join("snap_config.json");

        let mut config = SnapConfig::default();
        config.snap_rounding = 0.25;
        config.fine_rotation.key = KeyCode::ShiftLeft;
        config.save(&path).unwrap();

        let loaded = SnapConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = std::env::temp_dir().join("snap_builder_definitely_missing.json");
        assert_eq!(SnapConfig::load_or_default(&path), SnapConfig::default());
    }
}
