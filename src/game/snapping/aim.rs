//! Aim Ray
//!
//! The host's aim frame sways with the camera. Casting from a steadier
//! ancestor keeps the snapped point from jittering while the player stands
//! still.

use glam::Vec3;

use crate::scene::{FrameId, FrameResolver};

/// Name of the camera offset frame whose parent does not sway.
pub const STABLE_AIM_ANCESTOR: &str = "camOffset";

/// Ray used for placement queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimRay {
    pub origin: Vec3,
    /// Unit forward of the raw aim frame
    pub direction: Vec3,
}

/// Frame whose position serves as the ray origin.
///
/// Preference order: the parent of the nearest `camOffset` ancestor, the
/// nearest ancestor positioned away from the aim frame, the aim frame.
pub fn stable_aim_frame(scene: &dyn FrameResolver, aim_frame: FrameId) -> FrameId {
    if let Some(parent) = scene
        .find_ancestor_named(aim_frame, STABLE_AIM_ANCESTOR)
        .and_then(|offset| scene.parent(offset))
    {
        return parent;
    }

    let Some(aim_position) = scene.world_transform(aim_frame).map(|t| t.position) else {
        return aim_frame;
    };
    scene
        .find_ancestor(aim_frame, &|id| {
            scene.world_transform(id).is_some_and(|t| t.position != aim_position)
        })
        .unwrap_or(aim_frame)
}

/// Ray from the stable aim frame along the raw aim frame's forward.
///
/// `None` when the aim frame has no transform.
pub fn resolve_aim_ray(scene: &dyn FrameResolver, aim_frame: FrameId) -> Option<AimRay> {
    let aim = scene.world_transform(aim_frame)?;
    let origin = scene
        .world_transform(stable_aim_frame(scene, aim_frame))
        .map_or(aim.position, |t| t.position);
    Some(AimRay {
        origin,
        direction: aim.forward(),
    })
}
