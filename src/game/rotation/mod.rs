//! Rotation Module
//!
//! Placement rotation: the hold-to-repeat user offset, the snapped
//! orientation built from it, and the host's stock rotation for items
//! without user rotation.

pub mod hold_repeat;
pub mod orientation;
pub mod stock;

pub use hold_repeat::{HOLD_REPEAT_INTERVAL, HoldRepeat, HoldState, apply_additive_rotation};
pub use orientation::{
    PlayerView, RotationRequest, base_orientation, calculate_rotation, snapped_rotation,
};
pub use stock::stock_rotation;
