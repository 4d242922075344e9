//! Collider Cache
//!
//! Original state of every collider placement has targeted this session, so
//! anything changed while placing can be put back when placement ends.
//! Records are created on first lookup and never evicted.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;

use crate::physics::{ColliderHost, ColliderId, ColliderState};

/// A collider and the state it had when first targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderRecord {
    pub collider: ColliderId,
    pub original: ColliderState,
}

impl ColliderRecord {
    /// Capture the collider's current state. `None` if the host no longer
    /// knows the collider.
    pub fn capture(host: &dyn ColliderHost, collider: ColliderId) -> Option<Self> {
        host.collider_state(collider).map(|original| Self { collider, original })
    }

    pub fn revert(&self, host: &mut dyn ColliderHost) {
        host.restore_collider_state(self.collider, self.original);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColliderCache {
    records: HashMap<ColliderId, ColliderRecord>,
    active: Option<ColliderId>,
}

impl ColliderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `collider`, captured on first lookup. The record becomes
    /// the active one.
    pub fn get_record(
        &mut self,
        host: &dyn ColliderHost,
        collider: ColliderId,
    ) -> Option<&ColliderRecord> {
        let record = match self.records.entry(collider) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                let record = ColliderRecord::capture(host, collider)?;
                debug!("captured original state of {collider:?}");
                slot.insert(record)
            }
        };
        self.active = Some(collider);
        Some(record)
    }

    /// The most recently looked-up record.
    pub fn active_record(&self) -> Option<&ColliderRecord> {
        self.active.and_then(|id| self.records.get(&id))
    }

    /// Restore every captured state and clear the active record.
    ///
    /// Records are kept, so a later lookup still sees the original state.
    pub fn revert_all(&mut self, host: &mut dyn ColliderHost) {
        self.active = None;
        for record in self.records.values() {
            record.revert(host);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
