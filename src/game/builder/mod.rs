//! Builder Module
//!
//! Placement hooks for the host's building mode.

pub mod mode;
pub mod placement;

pub use mode::SnapBuilder;
pub use placement::{BeginContext, PlacementFrame, PlacementOutcome, PlacementOverride};
