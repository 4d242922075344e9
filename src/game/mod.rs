//! Game Module
//!
//! Placement snapping built on top of the engine ports.

pub mod builder;
pub mod collider_cache;
pub mod config;
pub mod hints;
pub mod lang;
pub mod rotation;
pub mod session;
pub mod snapping;

pub use builder::{BeginContext, PlacementFrame, PlacementOutcome, PlacementOverride, SnapBuilder};
pub use collider_cache::{ColliderCache, ColliderRecord};
pub use config::{ConfigError, OptionValue, SnapConfig};
pub use hints::HintSink;
pub use lang::Lang;
pub use rotation::{HoldRepeat, PlayerView, RotationRequest};
pub use session::PlacementSession;
pub use snapping::{SnapRequest, SnappedHit, try_get_snapped_hit_point};
