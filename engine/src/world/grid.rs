//! Grid Rounding Module
//!
//! Scalar and per-axis rounding used by both grid snapping and rotation
//! snapping.
//!
//! ## Midpoint rule
//! Values exactly halfway between two multiples round to the even multiple
//! (banker's rounding), matching the host's own rounding so that snapped
//! positions agree with what the host would compute for the same input.

use glam::{BVec3, Vec3};

/// One full turn in degrees.
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Round `value` to the nearest multiple of `step`.
///
/// A non-positive or non-finite step leaves the value unchanged.
pub fn round_to_nearest(value: f32, step: f32) -> f32 {
    if !(step > 0.0 && step.is_finite()) {
        return value;
    }
    step * (value / step).round_ties_even()
}

/// Round `value` down to the nearest multiple of `step`.
///
/// A non-positive or non-finite step leaves the value unchanged.
pub fn floor_to_nearest(value: f32, step: f32) -> f32 {
    if !(step > 0.0 && step.is_finite()) {
        return value;
    }
    step * (value / step).floor()
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can land on the upper bound for tiny negative inputs
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Round an angle to `step` degrees and wrap it into `[0, 360)`.
///
/// The result is always a multiple of `step`, so snapping it again returns
/// it unchanged. When `step` does not divide a full turn, angles that round
/// up to a full turn or past it land on 0.
pub fn snap_degrees(degrees: f32, step: f32) -> f32 {
    let snapped = round_to_nearest(wrap_degrees(degrees), step);
    if snapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        snapped
    }
}

/// Round the components of `position` selected by `axes` to the nearest
/// multiple of `grid_size`. Unselected components are returned unchanged.
pub fn snap_axes(position: Vec3, axes: BVec3, grid_size: f32) -> Vec3 {
    Vec3::new(
        snap_component(position.x, axes.x, grid_size),
        snap_component(position.y, axes.y, grid_size),
        snap_component(position.z, axes.z, grid_size),
    )
}

fn snap_component(value: f32, selected: bool, grid_size: f32) -> f32 {
    if selected {
        round_to_nearest(value, grid_size)
    } else {
        value
    }
}
