//! Config Module
//!
//! Persisted user options and their options-panel descriptors.

pub mod options;
pub mod snap_config;

pub use options::{OPTIONS, OptionEntry, OptionKind, OptionValue, find_option};
pub use snap_config::{
    ConfigError, DEFAULT_FINE_ROTATION_ROUNDING, DEFAULT_FINE_SNAP_ROUNDING,
    DEFAULT_ROTATION_ROUNDING, DEFAULT_SNAP_ROUNDING, SnapConfig,
};
