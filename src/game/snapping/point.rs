//! Point Snapping
//!
//! Rounds the aimed-at point to a grid laid out in the struck object's own
//! frame, then casts again toward the rounded point so the result lies on
//! real geometry.
//!
//! The grid frame is the struck frame's parent for ground hits and the
//! struck frame itself otherwise, so floor tiles of one base share a grid.
//! Rounding only touches the axes the surface extends along; the axis that
//! matches the surface normal keeps its value.

use glam::{BVec3, Vec3};
use log::debug;

use super::aim::resolve_aim_ray;
use crate::physics::{LayerMask, RayCaster, RaycastHit};
use crate::scene::{FrameId, FrameResolver, Transform};
use crate::world::{SurfaceType, snap_axes};

/// How close to 1 a normal component must be for its axis to count as the
/// normal axis.
pub const NORMAL_AXIS_TOLERANCE: f32 = 1e-4;

/// Height above the snapped point that normal samples start from.
pub const NORMAL_SAMPLE_RISE: f32 = 0.1;

/// Horizontal distance of normal samples from the snapped point.
pub const NORMAL_SAMPLE_RADIUS: f32 = 0.2;

const DIAGONAL: f32 = 0.707;

/// Horizontal directions around the snapped point that are sampled for
/// mesh normals.
pub const NORMAL_SAMPLE_OFFSETS: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(DIAGONAL, 0.0, DIAGONAL),
    Vec3::new(-DIAGONAL, 0.0, DIAGONAL),
    Vec3::new(DIAGONAL, 0.0, -DIAGONAL),
    Vec3::new(-DIAGONAL, 0.0, -DIAGONAL),
];

/// Squared length under which two normals count as the same.
const SAME_NORMAL_EPSILON_SQ: f32 = 1e-10;

/// Parameters of one snapping query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRequest {
    pub aim_frame: FrameId,
    pub layer_mask: LayerMask,
    pub max_distance: f32,
    /// Grid interval currently in effect
    pub grid_interval: f32,
}

/// A snapped placement point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnappedHit {
    /// The hit at the snapped position; its collider is the placement target
    pub hit: RaycastHit,
    pub point: Vec3,
    /// Surface normal, refined for mesh surfaces
    pub normal: Vec3,
}

/// Frame whose axes the grid is laid out along.
pub fn grid_frame(scene: &dyn FrameResolver, hit: &RaycastHit) -> FrameId {
    match hit.surface_type() {
        SurfaceType::Ground => scene.parent(hit.frame).unwrap_or(hit.frame),
        _ => hit.frame,
    }
}

/// Axes along which the surface extends, given the absolute local normal.
pub fn in_plane_axes(abs_local_normal: Vec3) -> BVec3 {
    abs_local_normal.cmplt(Vec3::splat(1.0 - NORMAL_AXIS_TOLERANCE))
}

/// Round `local_point` on the in-plane axes of `local_normal`.
pub fn snap_local_point(local_point: Vec3, local_normal: Vec3, grid_interval: f32) -> Vec3 {
    let abs_normal = local_normal.normalize_or_zero().abs().normalize_or_zero();
    snap_axes(local_point, in_plane_axes(abs_normal), grid_interval)
}

/// Cast toward the aim, snap, and cast again toward the snapped point.
///
/// `None` means there is no valid placement point this frame.
pub fn try_get_snapped_hit_point(
    scene: &dyn FrameResolver,
    physics: &dyn RayCaster,
    request: &SnapRequest,
) -> Option<SnappedHit> {
    let Some(aim) = resolve_aim_ray(scene, request.aim_frame) else {
        debug!("aim frame {:?} has no transform", request.aim_frame);
        return None;
    };

    let Some(first) =
        physics.raycast(aim.origin, aim.direction, request.max_distance, request.layer_mask)
    else {
        debug!("aim ray hit nothing");
        return None;
    };

    let frame = grid_frame(scene, &first);
    let frame_transform = scene
        .world_transform(frame)
        .or_else(|| scene.world_transform(first.frame))
        .unwrap_or(Transform::IDENTITY);
    // normals are read in the grid frame's parent
    let normal_transform = scene
        .parent(frame)
        .and_then(|parent| scene.world_transform(parent))
        .unwrap_or(frame_transform);

    let local_point = frame_transform.inverse_transform_point(first.point);
    let local_normal = normal_transform.inverse_transform_direction(first.normal);
    let snapped_local = snap_local_point(local_point, local_normal, request.grid_interval);
    let target = frame_transform.transform_point(snapped_local);

    let Some(hit) = physics.raycast(
        aim.origin,
        target - aim.origin,
        request.max_distance,
        request.layer_mask,
    ) else {
        debug!("snapped point {target} is not reachable");
        return None;
    };

    let normal = if hit.kind.has_shared_mesh() {
        refine_mesh_normal(physics, &hit, request.layer_mask, request.max_distance)
    } else {
        hit.normal
    };

    Some(SnappedHit {
        hit,
        point: hit.point,
        normal,
    })
}

/// Blend in the normals of nearby points on the same mesh.
///
/// Samples agreeing with the hit normal are ignored; every differing sample
/// adds half its normal before the sum is normalized.
pub fn refine_mesh_normal(
    physics: &dyn RayCaster,
    hit: &RaycastHit,
    mask: LayerMask,
    max_distance: f32,
) -> Vec3 {
    let start = hit.point + Vec3::Y * NORMAL_SAMPLE_RISE;
    let mut normal = hit.normal;

    for offset in NORMAL_SAMPLE_OFFSETS {
        let origin = start + offset * NORMAL_SAMPLE_RADIUS;
        let Some(sample) = physics.raycast(origin, Vec3::NEG_Y, max_distance, mask) else {
            continue;
        };
        if sample.frame != hit.frame {
            continue;
        }
        if (sample.normal - hit.normal).length_squared() >= SAME_NORMAL_EPSILON_SQ {
            normal += sample.normal / 2.0;
        }
    }

    normal.try_normalize().unwrap_or(hit.normal)
}
