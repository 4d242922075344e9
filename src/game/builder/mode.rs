//! Snap Builder
//!
//! [`PlacementOverride`] that snaps placement to a grid and to rotation
//! steps.

use glam::Vec3;
use log::{debug, info, warn};

use super::placement::{BeginContext, PlacementFrame, PlacementOutcome, PlacementOverride};
use crate::game::config::SnapConfig;
use crate::game::hints::{self, HintSink};
use crate::game::lang::Lang;
use crate::game::rotation::{RotationRequest, calculate_rotation, stock_rotation};
use crate::game::session::PlacementSession;
use crate::game::snapping::{SnapRequest, try_get_snapped_hit_point};
use crate::input::KeyInput;
use crate::physics::ColliderHost;

/// Snapping placement state: user options, strings, and the current session.
#[derive(Debug, Clone)]
pub struct SnapBuilder {
    config: SnapConfig,
    lang: Lang,
    session: Option<PlacementSession>,
}

impl Default for SnapBuilder {
    fn default() -> Self {
        Self::new(SnapConfig::default(), Lang::english())
    }
}

impl SnapBuilder {
    pub fn new(config: SnapConfig, lang: Lang) -> Self {
        Self {
            config,
            lang,
            session: None,
        }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Mutable options, e.g. for the options panel.
    pub fn config_mut(&mut self) -> &mut SnapConfig {
        &mut self.config
    }

    pub fn lang(&self) -> &Lang {
        &self.lang
    }

    pub fn lang_mut(&mut self) -> &mut Lang {
        &mut self.lang
    }

    pub fn session(&self) -> Option<&PlacementSession> {
        self.session.as_ref()
    }

    /// Start placing a hand-held item.
    ///
    /// Resets toggles and shows the rotation toggle and holster hints.
    /// `exit_label` is the host's display text for its exit binding.
    pub fn begin_hand_placement(&mut self, exit_label: &str, sink: &mut dyn HintSink) {
        self.config.reset_toggles();
        sink.show(&hints::toggle_rotation_hint(&self.lang, &self.config));
        sink.show(&hints::holster_hint(&self.lang, exit_label));
    }
}

impl PlacementOverride for SnapBuilder {
    fn begin(&mut self, ctx: BeginContext, sink: &mut dyn HintSink) {
        self.config.reset_toggles();
        self.session = Some(PlacementSession::new());
        info!("placement session started (first ghost: {})", ctx.first_ghost);

        if ctx.first_ghost {
            for line in hints::snapping_hints(&self.lang, &self.config) {
                sink.show(&line);
            }
            if ctx.rotation_enabled {
                sink.show(&hints::fine_rotation_hint(&self.lang, &self.config));
            }
        }
    }

    fn update_toggles(&mut self, keys: &dyn KeyInput) {
        self.config.update_toggles(keys);
    }

    fn place_on_surface(&mut self, frame: &PlacementFrame<'_>) -> PlacementOutcome {
        if !self.config.snapping.enabled() {
            return PlacementOutcome::RunOriginal;
        }

        let request = SnapRequest {
            aim_frame: frame.aim_frame,
            layer_mask: frame.layer_mask,
            max_distance: frame.max_distance,
            grid_interval: self.config.grid_interval(),
        };
        let Some(snapped) = try_get_snapped_hit_point(frame.scene, frame.physics, &request) else {
            return PlacementOutcome::NoPlacement;
        };

        let step = self.config.rotation_interval();
        let session = self.session.get_or_insert_with(|| {
            warn!("placement without an active session; starting one");
            PlacementSession::new()
        });

        let target = snapped.hit.collider;
        session.colliders.get_record(frame.colliders, target);
        session.placement_target = Some(target);

        let rotation = if frame.rotation_enabled {
            let request = RotationRequest {
                snapped,
                player: frame.player,
                force_upright: frame.force_upright,
                follow_surface_forward: frame.follow_surface_forward,
            };
            calculate_rotation(session, frame.input, frame.scene, &request, step)
        } else {
            let aim_forward = frame
                .scene
                .world_transform(frame.aim_frame)
                .map_or(Vec3::Z, |t| t.forward());
            stock_rotation(snapped.normal, aim_forward, frame.force_upright)
        };

        debug!("placed at {} on {target:?}", snapped.point);
        PlacementOutcome::Placed {
            position: snapped.point,
            rotation,
            target,
        }
    }

    fn end(&mut self, colliders: &mut dyn ColliderHost) {
        match self.session.take() {
            Some(mut session) => {
                session.colliders.revert_all(colliders);
                info!("placement session ended, {} collider(s) reverted", session.colliders.len());
            }
            None => debug!("end called without an active session"),
        }
    }
}
