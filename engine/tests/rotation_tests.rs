//! Rotation Tests - Hold-to-Repeat Accumulator and Snapped Orientation
//!
//! Scripted button sequences through `InputRecorder`, checking the rotation
//! accumulator and the orientation built from it.

use glam::{Quat, Vec3};
use snap_builder_engine::game::config::options::OptionValue;
use snap_builder_engine::game::lang::option;
use snap_builder_engine::game::rotation::{
    HoldRepeat, HoldState, PlayerView, RotationRequest, apply_additive_rotation, calculate_rotation,
    snapped_rotation,
};
use snap_builder_engine::game::{PlacementSession, SnapConfig, SnappedHit};
use snap_builder_engine::input::{Button, InputRecorder};
use snap_builder_engine::physics::{ColliderId, ColliderKind, RaycastHit};
use snap_builder_engine::scene::{FrameId, SceneGraph, Transform, yaw_degrees};

const FRAME: f32 = 1.0 / 60.0;

fn floor_request(frame: FrameId, player: Vec3) -> RotationRequest {
    let hit = RaycastHit {
        point: Vec3::ZERO,
        normal: Vec3::Y,
        distance: 2.0,
        frame,
        collider: ColliderId(1),
        kind: ColliderKind::Primitive,
    };
    RotationRequest {
        snapped: SnappedHit {
            hit,
            point: Vec3::ZERO,
            normal: Vec3::Y,
        },
        player: PlayerView {
            position: player,
            inside_walkable: true,
        },
        force_upright: false,
        follow_surface_forward: true,
    }
}

fn is_multiple(value: f32, step: f32) -> bool {
    let cells = value / step;
    (cells - cells.round()).abs() < 1e-3
}

/// On the step grid before wrapping into `[0, 360)`.
fn on_step(degrees: f32, step: f32) -> bool {
    [degrees, degrees - 360.0, degrees + 360.0]
        .into_iter()
        .any(|d| is_multiple(d, step))
}

// ============================================================================
// Accumulator
// ============================================================================

#[test]
fn test_accumulator_stays_in_range_over_long_sequences() {
    let mut input = InputRecorder::new();
    let mut hold = HoldRepeat::new();
    let mut additive = 0.0;

    // alternate long and short holds of both buttons with changing steps
    let pattern: [(Button, u32, f32); 6] = [
        (Button::RotateCw, 90, 45.0),
        (Button::RotateCcw, 7, 5.0),
        (Button::RotateCw, 200, 7.0),
        (Button::RotateCcw, 400, 45.0),
        (Button::RotateCw, 3, 90.0),
        (Button::RotateCcw, 150, 13.0),
    ];
    for (button, frames, step) in pattern {
        input.press(button);
        for _ in 0..frames {
            apply_additive_rotation(&mut additive, &mut hold, &input, step);
            assert!((0.0..360.0).contains(&additive), "accumulator escaped: {additive}");
            input.advance(FRAME);
        }
        input.release(button);
        apply_additive_rotation(&mut additive, &mut hold, &input, step);
        assert!((0.0..360.0).contains(&additive));
        assert!(on_step(additive, step), "{additive} is off the {step} degree grid");
        input.advance(FRAME);
    }
}

#[test]
fn test_release_freezes_accumulator() {
    let mut input = InputRecorder::new();
    let mut hold = HoldRepeat::new();
    let mut additive = 0.0;

    input.press(Button::RotateCcw);
    for _ in 0..20 {
        apply_additive_rotation(&mut additive, &mut hold, &input, 5.0);
        input.advance(FRAME);
    }
    assert!(additive > 0.0);

    input.release(Button::RotateCcw);
    apply_additive_rotation(&mut additive, &mut hold, &input, 5.0);
    let frozen = additive;
    assert_eq!(hold.state(), HoldState::Idle);

    for _ in 0..120 {
        input.advance(FRAME);
        apply_additive_rotation(&mut additive, &mut hold, &input, 5.0);
        assert_eq!(additive, frozen);
    }
}

#[test]
fn test_release_freezes_accumulator_with_uneven_step() {
    // 50 degrees does not divide a full turn
    let mut config = SnapConfig::default();
    config
        .apply_option(option::ROTATION_ROUNDING, OptionValue::Number(50.0))
        .unwrap();
    let step = config.rotation_interval();
    assert_eq!(step, 50.0);

    let mut input = InputRecorder::new();
    let mut hold = HoldRepeat::new();
    let mut additive = 0.0;

    // nine steps carry the accumulator past a full turn
    input.press(Button::RotateCcw);
    let mut fired = 0;
    while fired < 9 {
        fired += apply_additive_rotation(&mut additive, &mut hold, &input, step);
        input.advance(FRAME);
    }
    input.release(Button::RotateCcw);
    apply_additive_rotation(&mut additive, &mut hold, &input, step);
    let at_release = additive;
    assert!(is_multiple(at_release, step), "{at_release} is off the {step} degree grid");

    for _ in 0..30 {
        input.advance(FRAME);
        apply_additive_rotation(&mut additive, &mut hold, &input, step);
        assert_eq!(additive, at_release);
    }
}

#[test]
fn test_hold_repeat_rate() {
    let mut input = InputRecorder::new();
    let mut hold = HoldRepeat::new();
    let mut additive = 0.0;

    // one second of holding: buckets 0.00, 0.15, ... 0.90
    input.press(Button::RotateCcw);
    for _ in 0..60 {
        apply_additive_rotation(&mut additive, &mut hold, &input, 1.0);
        input.advance(FRAME);
    }
    assert_eq!(additive, 7.0);
}

#[test]
fn test_clockwise_wins_when_both_held() {
    let mut input = InputRecorder::new();
    let mut hold = HoldRepeat::new();
    let mut additive = 90.0;
    input.press(Button::RotateCw);
    input.press(Button::RotateCcw);
    apply_additive_rotation(&mut additive, &mut hold, &input, 45.0);
    assert_eq!(additive, 45.0);
    assert_eq!(hold.state(), HoldState::HeldCw);
}

// ============================================================================
// Snapped orientation
// ============================================================================

#[test]
fn test_yaw_always_on_step_for_any_player_position() {
    let mut graph = SceneGraph::new();
    let floor = graph.add_root("Floor", Transform::IDENTITY);
    for i in 0..36 {
        let angle = (i as f32 * 10.0 + 3.0).to_radians();
        let player = Vec3::new(angle.sin(), 0.0, angle.cos()) * 3.0;
        let request = floor_request(floor, player);
        for step in [45.0, 5.0, 15.0] {
            let rotation = snapped_rotation(&graph, &request, 0.0, step);
            assert!(on_step(yaw_degrees(rotation), step));
            assert!((rotation * Vec3::Y - Vec3::Y).length() < 1e-4);
        }
    }
}

#[test]
fn test_rotated_floor_snaps_relative_to_floor() {
    let mut graph = SceneGraph::new();
    let yaw = Quat::from_rotation_y(20f32.to_radians());
    let floor = graph.add_root("Floor", Transform::from_position_rotation(Vec3::ZERO, yaw));
    let request = floor_request(floor, Vec3::new(0.0, 0.0, 3.0));
    let rotation = snapped_rotation(&graph, &request, 0.0, 45.0);
    // relative yaw is -20, snapped to 0, leaving the floor's own 20
    assert!((yaw_degrees(rotation) - 20.0).abs() < 1e-3);
}

#[test]
fn test_calculate_rotation_uses_fine_step_when_toggled() {
    let mut graph = SceneGraph::new();
    let floor = graph.add_root("Floor", Transform::IDENTITY);
    let request = floor_request(floor, Vec3::new(0.0, 0.0, 3.0));

    let mut config = SnapConfig::default();
    config.fine_rotation.set_enabled(true);
    let mut session = PlacementSession::new();
    let mut input = InputRecorder::new();
    input.press(Button::RotateCw);

    let step = config.rotation_interval();
    let rotation = calculate_rotation(&mut session, &input, &graph, &request, step);
    assert_eq!(session.additive_rotation, 355.0);
    assert!((yaw_degrees(rotation) - 355.0).abs() < 1e-3);
}

#[test]
fn test_session_accumulator_resets_with_new_session() {
    let mut graph = SceneGraph::new();
    let floor = graph.add_root("Floor", Transform::IDENTITY);
    let request = floor_request(floor, Vec3::new(0.0, 0.0, 3.0));
    let mut input = InputRecorder::new();
    input.press(Button::RotateCcw);

    let mut session = PlacementSession::new();
    calculate_rotation(&mut session, &input, &graph, &request, 45.0);
    assert_eq!(session.additive_rotation, 45.0);

    let fresh = PlacementSession::new();
    assert_eq!(fresh.additive_rotation, 0.0);
    assert_eq!(fresh.hold.state(), HoldState::Idle);
}
