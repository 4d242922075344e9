//! Input Module
//!
//! Input as the placement code sees it: host game actions ([`Button`]), raw
//! keys ([`KeyCode`]) and key-bound [`Toggle`] options. The host supplies
//! per-frame state through [`ButtonInput`] and [`KeyInput`]; the
//! [`InputRecorder`] implements both for scripted runs.
//!
//! # Example
//!
//! ```rust
//! use snap_builder_engine::input::{Button, ButtonInput, InputRecorder};
//!
//! let mut input = InputRecorder::new();
//! input.press(Button::RotateCw);
//! input.advance(0.3);
//! assert!(input.is_held(Button::RotateCw));
//! assert!(input.held_time(Button::RotateCw) > 0.29);
//! ```

pub mod buttons;
pub mod keyboard;
pub mod recorder;
pub mod toggle;

pub use buttons::{Button, ButtonInput, KeyInput};
pub use keyboard::KeyCode;
pub use recorder::InputRecorder;
pub use toggle::{Toggle, ToggleMode};
