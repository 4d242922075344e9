//! Transform Module
//!
//! Rigid transform with non-uniform scale, using the host's axis
//! conventions: +Z forward, +Y up, +X right.

use glam::{EulerRot, Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::world::wrap_degrees;

/// Position, rotation and scale of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local point to world space.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * point)
    }

    /// World point to local space.
    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        (self.rotation.inverse() * (point - self.position)) / self.scale
    }

    /// Local direction to world space. Scale is ignored.
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }

    /// World direction to local space. Scale is ignored.
    pub fn inverse_transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation.inverse() * direction
    }

    /// Compose a child's local transform under this one.
    ///
    /// Non-uniform scale under rotation is approximated component-wise;
    /// shear is not represented.
    pub fn mul_transform(&self, local: &Transform) -> Transform {
        Transform {
            position: self.transform_point(local.position),
            rotation: (self.rotation * local.rotation).normalize(),
            scale: self.scale * local.scale,
        }
    }
}

/// Rotation whose forward (+Z) points along `forward` and whose up (+Y)
/// leans toward `up`.
///
/// When `forward` is zero the identity is returned. When `forward` and `up`
/// are parallel the shortest arc from +Z is used instead.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(f) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    match up.cross(f).try_normalize() {
        Some(r) => {
            let u = f.cross(r);
            Quat::from_mat3(&Mat3::from_cols(r, u, f)).normalize()
        }
        None => Quat::from_rotation_arc(Vec3::Z, f),
    }
}

/// Shortest rotation taking direction `from` onto direction `to`.
///
/// Zero-length inputs give the identity.
pub fn from_to_rotation(from: Vec3, to: Vec3) -> Quat {
    match (from.try_normalize(), to.try_normalize()) {
        (Some(a), Some(b)) => Quat::from_rotation_arc(a, b),
        _ => Quat::IDENTITY,
    }
}

/// Yaw of a rotation in degrees, wrapped into `[0, 360)`.
///
/// Uses the Y of a Y·X·Z decomposition, so pitch and roll do not leak into
/// the yaw.
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let (yaw, _pitch, _roll) = rotation.to_euler(EulerRot::YXZ);
    wrap_degrees(yaw.to_degrees())
}

/// Rotation of `degrees` about +Y.
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}
