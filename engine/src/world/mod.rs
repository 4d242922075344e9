//! World Module
//!
//! World-space helpers shared by the snapping and rotation code: grid
//! rounding and surface classification.

pub mod grid;
pub mod surface;

pub use grid::{
    FULL_TURN_DEGREES, floor_to_nearest, round_to_nearest, snap_axes, snap_degrees, wrap_degrees,
};
pub use surface::{SURFACE_SLOPE_THRESHOLD, SurfaceType};
