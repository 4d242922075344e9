//! Snapped Orientation
//!
//! The placed object is aligned to the struck object's forward and the
//! surface normal, turned to face the player, offset by the user's rotation
//! and finally snapped to the rotation step about its local up axis.

use glam::{Quat, Vec3};

use super::hold_repeat::apply_additive_rotation;
use crate::game::session::PlacementSession;
use crate::game::snapping::SnappedHit;
use crate::input::ButtonInput;
use crate::scene::{FrameResolver, from_to_rotation, look_rotation, yaw_degrees, yaw_rotation};
use crate::world::snap_degrees;

/// Smallest forward y of a mesh's frame that counts as tilted.
pub const TILTED_FORWARD_EPSILON: f32 = 1e-6;

/// Where the player is relative to the placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec3,
    /// Standing inside an enclosed base
    pub inside_walkable: bool,
}

/// Inputs of one rotation calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRequest {
    pub snapped: SnappedHit,
    pub player: PlayerView,
    /// Keep the object's up axis on world up
    pub force_upright: bool,
    /// Align to the struck object's forward; off for items that ignore it
    pub follow_surface_forward: bool,
}

/// Orientation before the player-facing yaw is applied.
pub fn base_orientation(scene: &dyn FrameResolver, request: &RotationRequest) -> Quat {
    let hit = &request.snapped.hit;
    let outside = !request.player.inside_walkable;

    // outside a base, align to the whole structure rather than the piece
    let reference = if outside {
        scene.entity_root(hit.frame).unwrap_or(hit.frame)
    } else {
        hit.frame
    };

    let mut base = Quat::IDENTITY;
    if request.follow_surface_forward
        && let Some(reference) = scene.world_transform(reference)
    {
        base = look_rotation(reference.forward(), Vec3::Y);
    }

    let tilted_mesh = hit.kind.has_shared_mesh()
        && scene
            .world_transform(hit.frame)
            .is_some_and(|t| t.forward().y.abs() > TILTED_FORWARD_EPSILON);

    if tilted_mesh && outside {
        from_to_rotation(Vec3::Y, request.snapped.normal)
    } else if !request.force_upright {
        from_to_rotation(Vec3::Y, request.snapped.normal) * base
    } else {
        base
    }
}

/// Snapped orientation for a given accumulated user rotation.
///
/// Pure; the accumulator is not modified.
pub fn snapped_rotation(
    scene: &dyn FrameResolver,
    request: &RotationRequest,
    additive: f32,
    step: f32,
) -> Quat {
    let base = base_orientation(scene, request);

    let to_player = request.player.position - request.snapped.point;
    let local = if to_player.length_squared() > 0.0 {
        base.inverse() * look_rotation(to_player, Vec3::Y)
    } else {
        Quat::IDENTITY
    };

    let yaw = snap_degrees(yaw_degrees(local) + additive, step);
    (base * yaw_rotation(yaw)).normalize()
}

/// Step the session's rotation accumulator by this frame's input and return
/// the snapped orientation.
pub fn calculate_rotation(
    session: &mut PlacementSession,
    input: &dyn ButtonInput,
    scene: &dyn FrameResolver,
    request: &RotationRequest,
    step: f32,
) -> Quat {
    apply_additive_rotation(&mut session.additive_rotation, &mut session.hold, input, step);
    snapped_rotation(scene, request, session.additive_rotation, step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{ColliderId, ColliderKind, RaycastHit};
    use crate::scene::{FrameId, SceneGraph, Transform};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    fn request(frame: FrameId, kind: ColliderKind, normal: Vec3, player: Vec3) -> RotationRequest {
        let hit = RaycastHit {
            point: Vec3::ZERO,
            normal,
            distance: 1.0,
            frame,
            collider: ColliderId(0),
            kind,
        };
        RotationRequest {
            snapped: SnappedHit {
                hit,
                point: Vec3::ZERO,
                normal,
            },
            player: PlayerView {
                position: player,
                inside_walkable: false,
            },
            force_upright: false,
            follow_surface_forward: true,
        }
    }

    #[test]
    fn test_faces_player_on_flat_floor() {
        let mut graph = SceneGraph::new();
        let floor = graph.add_root("Floor", Transform::IDENTITY);
        let req = request(floor, ColliderKind::Primitive, Vec3::Y, Vec3::new(0.0, 0.0, 5.0));
        let rotation = snapped_rotation(&graph, &req, 0.0, 45.0);
        assert!(approx(rotation * Vec3::Z, Vec3::Z));
        assert!(approx(rotation * Vec3::Y, Vec3::Y));
    }

    #[test]
    fn test_yaw_snaps_to_step() {
        let mut graph = SceneGraph::new();
        let floor = graph.add_root("Floor", Transform::IDENTITY);
        // player at roughly 30 degrees
        let player = Vec3::new(30f32.to_radians().sin(), 0.0, 30f32.to_radians().cos()) * 4.0;
        let req = request(floor, ColliderKind::Primitive, Vec3::Y, player);

        let rotation = snapped_rotation(&graph, &req, 0.0, 45.0);
        let yaw = yaw_degrees(rotation);
        assert!((yaw - 45.0).abs() < 1e-3, "yaw {yaw}");

        let rotation = snapped_rotation(&graph, &req, 90.0, 45.0);
        assert!((yaw_degrees(rotation) - 135.0).abs() < 1e-3);
    }

    #[test]
    fn test_wall_aligns_up_to_normal() {
        let mut graph = SceneGraph::new();
        let wall = graph.add_root("Wall", Transform::IDENTITY);
        let req = request(wall, ColliderKind::Primitive, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -3.0));
        let rotation = snapped_rotation(&graph, &req, 0.0, 45.0);
        assert!(approx(rotation * Vec3::Y, Vec3::NEG_Z));
    }

    #[test]
    fn test_force_upright_ignores_normal() {
        let mut graph = SceneGraph::new();
        let wall = graph.add_root("Wall", Transform::IDENTITY);
        let player = Vec3::new(0.0, 0.0, -3.0);
        let mut req = request(wall, ColliderKind::Primitive, Vec3::NEG_Z, player);
        req.force_upright = true;
        let rotation = snapped_rotation(&graph, &req, 0.0, 45.0);
        assert!(approx(rotation * Vec3::Y, Vec3::Y));
    }

    #[test]
    fn test_follows_entity_root_forward_outside() {
        let mut graph = SceneGraph::new();
        let base_local = Transform::from_position_rotation(Vec3::ZERO, yaw_rotation(90.0));
        let base = graph.add_root("Base", base_local);
        graph.mark_entity_root(base);
        let piece_local = Transform::from_position_rotation(Vec3::ZERO, yaw_rotation(-90.0));
        let piece = graph.add_frame("Foundation", Some(base), piece_local);
        let req = request(piece, ColliderKind::Primitive, Vec3::Y, Vec3::ZERO);

        // the player stands on the point, so only the base orientation shows
        let rotation = snapped_rotation(&graph, &req, 0.0, 45.0);
        assert!(approx(rotation * Vec3::Z, Vec3::X));

        let mut inside = req;
        inside.player.inside_walkable = true;
        let rotation = snapped_rotation(&graph, &inside, 0.0, 45.0);
        assert!(approx(rotation * Vec3::Z, Vec3::Z));
    }

    #[test]
    fn test_tilted_mesh_uses_world_axes() {
        let mut graph = SceneGraph::new();
        let tilt = Quat::from_rotation_x(0.3);
        let rock = graph.add_root("Rock", Transform::from_position_rotation(Vec3::ZERO, tilt));
        let normal = Vec3::new(0.0, 1.0, 0.2).normalize();
        let req = request(rock, ColliderKind::Mesh { shared_mesh: true }, normal, Vec3::ZERO);

        let expected = from_to_rotation(Vec3::Y, normal);
        assert!(base_orientation(&graph, &req).abs_diff_eq(expected, 1e-5));

        let primitive = request(rock, ColliderKind::Primitive, normal, Vec3::ZERO);
        // primitives keep the frame's pitched forward
        let base = base_orientation(&graph, &primitive);
        assert!(!base.abs_diff_eq(from_to_rotation(Vec3::Y, normal), 1e-3));
    }

    #[test]
    fn test_calculate_rotation_steps_accumulator() {
        let mut graph = SceneGraph::new();
        let floor = graph.add_root("Floor", Transform::IDENTITY);
        let req = request(floor, ColliderKind::Primitive, Vec3::Y, Vec3::new(0.0, 0.0, 5.0));
        let mut session = PlacementSession::new();
        let mut input = crate::input::InputRecorder::new();
        input.press(crate::input::Button::RotateCcw);

        let rotation = calculate_rotation(&mut session, &input, &graph, &req, 45.0);
        assert_eq!(session.additive_rotation, 45.0);
        assert!((yaw_degrees(rotation) - 45.0).abs() < 1e-3);
    }
}
