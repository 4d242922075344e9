//! Scene Module
//!
//! Transforms and the host transform hierarchy.
//!
//! Placement code only sees the hierarchy through [`FrameResolver`], so the
//! snapping and rotation algorithms run the same against the host's scene
//! graph or the in-memory [`SceneGraph`].

pub mod graph;
pub mod transform;

pub use graph::{FrameId, FrameResolver, SceneGraph};
pub use transform::{Transform, from_to_rotation, look_rotation, yaw_degrees, yaw_rotation};
