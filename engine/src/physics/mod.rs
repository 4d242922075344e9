//! Physics module
//!
//! Raycasting for placement: the [`RayCaster`] and [`ColliderHost`] ports the
//! snapping code talks to, the intersection primitives, and an in-memory
//! [`PhysicsWorld`] implementing both ports.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, matching the host.
//!
//! # Submodules
//!
//! - [`collision`] - Ray-AABB and ray-triangle intersection
//! - [`raycast`] - Hit records, layer masks and the `RayCaster` port
//! - [`collider_state`] - Collider flags and the `ColliderHost` port
//! - [`world`] - Brute-force collider set

pub mod collider_state;
pub mod collision;
pub mod raycast;
pub mod world;

pub use collider_state::{ColliderHost, ColliderState};
pub use collision::{aabb_surface_normal, ray_aabb_intersect, ray_triangle_intersect};
pub use raycast::{ColliderId, ColliderKind, LayerMask, RayCaster, RaycastHit};
pub use world::{Collider, PhysicsWorld, Shape};
