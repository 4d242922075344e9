//! Raycast Port
//!
//! Hit records and the `RayCaster` trait the placement code casts through.
//! Trigger volumes never produce hits.

use glam::Vec3;

use crate::scene::FrameId;
use crate::world::SurfaceType;

/// Identity of a host collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u32);

/// What kind of collider produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderKind {
    /// Box, sphere, capsule and other analytic shapes
    Primitive,
    /// Mesh collider; `shared_mesh` is false when it has no mesh data bound
    Mesh { shared_mesh: bool },
}

impl ColliderKind {
    /// Mesh collider with mesh data, e.g. terrain or a curved roof.
    pub fn has_shared_mesh(&self) -> bool {
        matches!(self, ColliderKind::Mesh { shared_mesh: true })
    }
}

/// Bit set of collision layers a query considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: Self = Self(u32::MAX);
    pub const NONE: Self = Self(0);

    /// Mask containing a single layer (0-31).
    pub fn layer(layer: u8) -> Self {
        Self(1u32.checked_shl(layer as u32).unwrap_or(0))
    }

    pub fn with(self, layer: u8) -> Self {
        Self(self.0 | Self::layer(layer).0)
    }

    pub fn contains(&self, layer: u8) -> bool {
        self.0 & Self::layer(layer).0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Result of a successful raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// World-space hit point
    pub point: Vec3,
    /// World-space unit surface normal
    pub normal: Vec3,
    /// Distance from the ray origin
    pub distance: f32,
    /// Frame the struck collider is attached to
    pub frame: FrameId,
    pub collider: ColliderId,
    pub kind: ColliderKind,
}

impl RaycastHit {
    pub fn surface_type(&self) -> SurfaceType {
        SurfaceType::from_normal(self.normal)
    }
}

/// Physics raycasting supplied by the host.
pub trait RayCaster {
    /// Cast a ray and return the nearest non-trigger hit within
    /// `max_distance` on a layer in `mask`.
    ///
    /// `direction` need not be normalized; a zero direction never hits.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RaycastHit>;
}
