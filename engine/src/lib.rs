//! Snap Builder Library
//!
//! Grid and rotation snapping for a host engine's building placement.
//! The host's scene graph, physics and input are reached through small
//! traits, with in-memory implementations for tests and the sandbox.
//!
//! # Modules
//!
//! - [`world`] - Grid rounding and surface classification
//! - [`scene`] - Transforms and the frame hierarchy port
//! - [`physics`] - Raycasting and collider state ports
//! - [`input`] - Button, key and toggle input
//! - [`game`] - Snapping, rotation, configuration and the placement override
//!
//! # Example
//!
//! ```rust
//! use glam::Vec3;
//! use snap_builder_engine::game::{
//!     PlacementFrame, PlacementOutcome, PlacementOverride, PlayerView, SnapBuilder,
//! };
//! use snap_builder_engine::input::InputRecorder;
//! use snap_builder_engine::physics::{LayerMask, PhysicsWorld};
//! use snap_builder_engine::scene::{SceneGraph, Transform, look_rotation};
//!
//! let mut scene = SceneGraph::new();
//! let floor = scene.add_root("Floor", Transform::from_position(Vec3::new(0.0, -0.5, 0.0)));
//! let eye = Vec3::new(0.1, 1.7, 0.0);
//! let aim = look_rotation(Vec3::new(1.2, -1.7, 1.1), Vec3::Y);
//! let camera = scene.add_root("Camera", Transform::from_position_rotation(eye, aim));
//!
//! let mut physics = PhysicsWorld::new();
//! physics.add_cuboid(&scene, floor, Vec3::new(10.0, 0.5, 10.0), 0);
//!
//! let input = InputRecorder::new();
//! let mut builder = SnapBuilder::default();
//! let outcome = builder.place_on_surface(&PlacementFrame {
//!     scene: &scene,
//!     physics: &physics,
//!     colliders: &physics,
//!     input: &input,
//!     player: PlayerView { position: Vec3::ZERO, inside_walkable: false },
//!     aim_frame: camera,
//!     layer_mask: LayerMask::ALL,
//!     max_distance: 5.0,
//!     rotation_enabled: true,
//!     force_upright: false,
//!     follow_surface_forward: true,
//! });
//!
//! let PlacementOutcome::Placed { position, .. } = outcome else {
//!     panic!("expected a placement");
//! };
//! // on the default 0.5 m grid
//! assert!((position - Vec3::new(1.5, 0.0, 1.0)).length() < 1e-4);
//! ```

pub mod input;
pub mod physics;
pub mod scene;
pub mod world;

// Placement systems (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use game::{PlacementOutcome, PlacementOverride, SnapBuilder, SnapConfig};
pub use input::{Button, KeyCode};
pub use physics::{LayerMask, RaycastHit};
pub use scene::{FrameId, Transform};
