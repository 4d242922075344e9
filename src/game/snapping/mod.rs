//! Snapping Module
//!
//! Grid snapping of the placement point.
//!
//! - [`aim`] - Stabilised aim ray
//! - [`point`] - Grid rounding in the struck object's frame and mesh normal refinement

pub mod aim;
pub mod point;

pub use aim::{AimRay, STABLE_AIM_ANCESTOR, resolve_aim_ray, stable_aim_frame};
pub use point::{
    NORMAL_AXIS_TOLERANCE, NORMAL_SAMPLE_OFFSETS, SnapRequest, SnappedHit, grid_frame,
    refine_mesh_normal, snap_local_point, try_get_snapped_hit_point,
};
