//! Placement Override
//!
//! The interface the host calls in place of its own placement routine, and
//! the per-frame state it passes in.

use glam::{Quat, Vec3};

use crate::game::hints::HintSink;
use crate::game::rotation::PlayerView;
use crate::input::{ButtonInput, KeyInput};
use crate::physics::{ColliderHost, ColliderId, LayerMask, RayCaster};
use crate::scene::{FrameId, FrameResolver};

/// Host state at the start of a placement session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeginContext {
    /// No ghost model existed before this session
    pub first_ghost: bool,
    /// The item being placed allows user rotation
    pub rotation_enabled: bool,
}

/// Host state for one placement frame.
pub struct PlacementFrame<'a> {
    pub scene: &'a dyn FrameResolver,
    pub physics: &'a dyn RayCaster,
    pub colliders: &'a dyn ColliderHost,
    pub input: &'a dyn ButtonInput,
    pub player: PlayerView,
    /// Camera-attached frame the player aims with
    pub aim_frame: FrameId,
    pub layer_mask: LayerMask,
    pub max_distance: f32,
    pub rotation_enabled: bool,
    pub force_upright: bool,
    pub follow_surface_forward: bool,
}

/// What the host should do with this frame's placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    /// Snapping is off; run the host's own placement
    RunOriginal,
    /// No valid placement point; treat as if nothing was hit
    NoPlacement,
    Placed {
        position: Vec3,
        rotation: Quat,
        /// Collider the item is placed on
        target: ColliderId,
    },
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed { .. })
    }
}

/// Replacement for the host's placement hooks.
///
/// The host calls [`begin`](PlacementOverride::begin) when placement starts,
/// [`update_toggles`](PlacementOverride::update_toggles) and
/// [`place_on_surface`](PlacementOverride::place_on_surface) every frame, and
/// [`end`](PlacementOverride::end) when placement stops.
pub trait PlacementOverride {
    fn begin(&mut self, ctx: BeginContext, hints: &mut dyn HintSink);

    fn update_toggles(&mut self, keys: &dyn KeyInput);

    fn place_on_surface(&mut self, frame: &PlacementFrame<'_>) -> PlacementOutcome;

    fn end(&mut self, colliders: &mut dyn ColliderHost);
}
