//! Collider State Port
//!
//! Mutable collider flags the host may change while an object is being
//! placed, and the trait used to read and restore them.

use super::ColliderId;

/// Flags of a collider that placement may temporarily change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderState {
    pub enabled: bool,
    pub is_trigger: bool,
    pub layer: u8,
}

impl Default for ColliderState {
    fn default() -> Self {
        Self {
            enabled: true,
            is_trigger: false,
            layer: 0,
        }
    }
}

/// Access to host collider flags.
pub trait ColliderHost {
    /// Current state, `None` if the collider no longer exists.
    fn collider_state(&self, collider: ColliderId) -> Option<ColliderState>;

    /// Overwrite a collider's state. Unknown colliders are ignored.
    fn restore_collider_state(&mut self, collider: ColliderId, state: ColliderState);
}
