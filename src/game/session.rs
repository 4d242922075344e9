//! Placement Session
//!
//! State that lives from the start of placement until it ends. Only the
//! configuration outlives a session.

use crate::physics::ColliderId;

use super::collider_cache::ColliderCache;
use super::rotation::HoldRepeat;

#[derive(Debug, Clone, Default)]
pub struct PlacementSession {
    /// User rotation offset in degrees, in `[0, 360)`
    pub additive_rotation: f32,
    pub hold: HoldRepeat,
    pub colliders: ColliderCache,
    /// Collider the last successful placement targeted
    pub placement_target: Option<ColliderId>,
}

impl PlacementSession {
    pub fn new() -> Self {
        Self::default()
    }
}
