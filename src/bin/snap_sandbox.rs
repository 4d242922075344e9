//! Snap Sandbox - Scripted Placement Run
//!
//! Builds a small synthetic base (foundation, wall, and a terrain mound) and
//! drives the snap builder through a scripted sequence of aims and inputs,
//! logging every placement.
//!
//! Run with: `cargo run --bin snap_sandbox [config.json]`
//!
//! Set `SNAP_LOG=debug` for per-frame snapping detail.

use std::path::Path;
use std::str::FromStr;

use glam::Vec3;
use log::{LevelFilter, error, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use snap_builder_engine::game::{
    BeginContext, Lang, PlacementFrame, PlacementOutcome, PlacementOverride, PlayerView,
    SnapBuilder, SnapConfig,
};
use snap_builder_engine::input::{Button, InputRecorder, KeyCode};
use snap_builder_engine::physics::{LayerMask, PhysicsWorld};
use snap_builder_engine::scene::{
    FrameId, FrameResolver, SceneGraph, Transform, look_rotation, yaw_degrees,
};

/// Seconds per simulated frame.
const FRAME_TIME: f32 = 1.0 / 30.0;
const PLACE_MAX_DISTANCE: f32 = 5.0;
const EYE_HEIGHT: f32 = 1.7;

// ============================================================================
// SCENE
// ============================================================================

struct Sandbox {
    scene: SceneGraph,
    physics: PhysicsWorld,
    player: FrameId,
    camera: FrameId,
}

impl Sandbox {
    fn build() -> Self {
        let mut scene = SceneGraph::new();

        let base = scene.add_root("Base", Transform::IDENTITY);
        scene.mark_entity_root(base);
        let foundation = scene.add_frame(
            "Foundation",
            Some(base),
            Transform::from_position(Vec3::new(0.0, -0.5, 0.0)),
        );
        let wall = scene.add_frame(
            "Wall",
            Some(base),
            Transform::from_position(Vec3::new(0.0, 1.5, 2.5)),
        );
        let terrain =
            scene.add_root("Terrain", Transform::from_position(Vec3::new(12.0, 0.0, 0.0)));

        let player = scene.add_root("Player", Transform::from_position(Vec3::new(0.0, 0.0, -2.0)));
        let head = scene.add_frame(
            "Head",
            Some(player),
            Transform::from_position(Vec3::Y * EYE_HEIGHT),
        );
        let cam_offset = scene.add_frame(
            "camOffset",
            Some(head),
            Transform::from_position(Vec3::new(0.02, -0.01, 0.0)),
        );
        let camera = scene.add_frame("Camera", Some(cam_offset), Transform::IDENTITY);

        let mut physics = PhysicsWorld::new();
        physics.add_cuboid(&scene, foundation, Vec3::new(5.0, 0.5, 5.0), 0);
        physics.add_cuboid(&scene, wall, Vec3::new(5.0, 1.5, 0.1), 0);
        physics.add_mesh(&scene, terrain, mound(3.0, 1.0), 0);

        Self {
            scene,
            physics,
            player,
            camera,
        }
    }

    fn move_player(&mut self, position: Vec3) {
        self.scene.set_local_transform(self.player, Transform::from_position(position));
    }

    /// Point the camera along a world direction.
    fn aim(&mut self, direction: Vec3) {
        let rotation = look_rotation(direction, Vec3::Y);
        let local = Transform::from_position_rotation(Vec3::ZERO, rotation);
        self.scene.set_local_transform(self.camera, local);
    }

    fn player_view(&self) -> PlayerView {
        PlayerView {
            position: self
                .scene
                .world_transform(self.player)
                .map_or(Vec3::ZERO, |t| t.position),
            inside_walkable: false,
        }
    }
}

/// Four-sided pyramid of the given half width and height, apex at the
/// frame origin raised by `height`.
fn mound(half_width: f32, height: f32) -> Vec<[Vec3; 3]> {
    let apex = Vec3::Y * height;
    let corners = [
        Vec3::new(-half_width, 0.0, -half_width),
        Vec3::new(half_width, 0.0, -half_width),
        Vec3::new(half_width, 0.0, half_width),
        Vec3::new(-half_width, 0.0, half_width),
    ];
    (0..corners.len())
        .map(|i| [corners[i], corners[(i + 1) % corners.len()], apex])
        .collect()
}

// ============================================================================
// SCRIPT
// ============================================================================

/// One scripted step: where to look and what to do with the input.
struct Step {
    label: &'static str,
    aim: Vec3,
    frames: u32,
    setup: fn(&mut InputRecorder),
}

fn script() -> Vec<Step> {
    vec![
        Step {
            label: "floor",
            aim: Vec3::new(0.3, -1.0, 0.9),
            frames: 1,
            setup: |_| {},
        },
        Step {
            label: "floor, fine grid",
            aim: Vec3::new(0.3, -1.0, 0.9),
            frames: 1,
            setup: |input| input.press_key(KeyCode::ControlLeft),
        },
        Step {
            label: "floor, rotating counter-clockwise",
            aim: Vec3::new(0.3, -1.0, 0.9),
            frames: 20,
            setup: |input| {
                input.release_key(KeyCode::ControlLeft);
                input.press(Button::RotateCcw);
            },
        },
        Step {
            label: "floor, released",
            aim: Vec3::new(0.3, -1.0, 0.9),
            frames: 5,
            setup: |input| input.release(Button::RotateCcw),
        },
        Step {
            label: "wall",
            aim: Vec3::new(-0.2, 0.0, 1.0),
            frames: 1,
            setup: |_| {},
        },
        Step {
            label: "snapping toggled off",
            aim: Vec3::new(-0.2, 0.0, 1.0),
            frames: 1,
            setup: |input| input.press_key(KeyCode::Mouse2),
        },
        Step {
            label: "snapping toggled on",
            aim: Vec3::new(-0.2, 0.0, 1.0),
            frames: 1,
            setup: |input| {
                input.release_key(KeyCode::Mouse2);
                input.advance(FRAME_TIME);
                input.press_key(KeyCode::Mouse2);
            },
        },
    ]
}

fn run_step(builder: &mut SnapBuilder, sandbox: &Sandbox, input: &mut InputRecorder, step: &Step) {
    (step.setup)(input);
    for frame in 0..step.frames {
        builder.update_toggles(&*input);
        let outcome = builder.place_on_surface(&PlacementFrame {
            scene: &sandbox.scene,
            physics: &sandbox.physics,
            colliders: &sandbox.physics,
            input: &*input,
            player: sandbox.player_view(),
            aim_frame: sandbox.camera,
            layer_mask: LayerMask::ALL,
            max_distance: PLACE_MAX_DISTANCE,
            rotation_enabled: true,
            force_upright: false,
            follow_surface_forward: true,
        });
        // only the last frame of a held step is interesting
        if frame + 1 == step.frames {
            report(step.label, &outcome);
        }
        input.advance(FRAME_TIME);
    }
}

fn report(label: &str, outcome: &PlacementOutcome) {
    match outcome {
        PlacementOutcome::Placed {
            position,
            rotation,
            target,
        } => {
            info!(
                "{label}: placed at ({:.3}, {:.3}, {:.3}) yaw {:.1} on {target:?}",
                position.x,
                position.y,
                position.z,
                yaw_degrees(*rotation)
            );
        }
        PlacementOutcome::NoPlacement => info!("{label}: no placement"),
        PlacementOutcome::RunOriginal => info!("{label}: snapping off, host placement runs"),
    }
}

fn init_logger() {
    let level = std::env::var("SNAP_LOG")
        .ok()
        .and_then(|s| LevelFilter::from_str(&s).ok())
        .unwrap_or(LevelFilter::Info);
    let config = ConfigBuilder::new().build();
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to initialise logger: {e}");
    }
}

fn main() {
    init_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => SnapConfig::load_or_default(Path::new(&path)),
        None => SnapConfig::default(),
    };
    if let Err(e) = config.validate() {
        error!("configuration rejected: {e}");
        return;
    }
    info!(
        "grid {} m (fine {} m), rotation {} deg (fine {} deg)",
        config.snap_rounding,
        config.fine_snap_rounding / 2.0,
        config.rotation_rounding,
        config.fine_rotation_rounding
    );

    let mut sandbox = Sandbox::build();
    let mut builder = SnapBuilder::new(config, Lang::english());
    let mut input = InputRecorder::new();
    let mut hints: Vec<String> = Vec::new();

    builder.begin(
        BeginContext {
            first_ghost: true,
            rotation_enabled: true,
        },
        &mut hints,
    );
    for line in &hints {
        info!("hint: {line}");
    }

    for step in script() {
        sandbox.aim(step.aim);
        run_step(&mut builder, &sandbox, &mut input, &step);
    }

    // walk over to the mound
    sandbox.move_player(Vec3::new(9.0, 0.0, 0.5));
    let terrain = Step {
        label: "terrain mound",
        aim: Vec3::new(1.0, -0.8, 0.0),
        frames: 1,
        setup: |_| {},
    };
    sandbox.aim(terrain.aim);
    run_step(&mut builder, &sandbox, &mut input, &terrain);

    builder.end(&mut sandbox.physics);
}
