//! Stock Rotation
//!
//! The host's own placement rotation, used for snapped positions when the
//! item being placed does not allow user rotation.

use glam::{Quat, Vec3};

use crate::scene::look_rotation;
use crate::world::SurfaceType;

/// Rotation the host would give an item at a surface with `normal`, aimed at
/// along `aim_forward`.
pub fn stock_rotation(normal: Vec3, aim_forward: Vec3, force_upright: bool) -> Quat {
    let back = -aim_forward;

    let (forward, up) = if force_upright {
        (Vec3::new(back.x, 0.0, back.z).normalize_or_zero(), Vec3::Y)
    } else {
        match SurfaceType::from_normal(normal) {
            SurfaceType::Ground => {
                let mut forward = back;
                forward.y -= forward.dot(normal);
                (forward.normalize_or_zero(), normal)
            }
            SurfaceType::Wall => (normal, Vec3::Y),
            SurfaceType::Ceiling => {
                let mut up = back;
                up.y -= up.dot(normal);
                (normal, up.normalize_or_zero())
            }
        }
    };

    look_rotation(forward, up)
}
