//! Hold-to-Repeat Rotation Input
//!
//! Holding a rotate button steps the rotation once immediately and then once
//! per [`HOLD_REPEAT_INTERVAL`] of hold time. Hold time is quantised into
//! buckets; a step fires whenever a later bucket is reached.

use log::trace;

use crate::input::{Button, ButtonInput};
use crate::world::{floor_to_nearest, snap_degrees};

/// Seconds between repeated rotation steps while a button is held.
pub const HOLD_REPEAT_INTERVAL: f32 = 0.15;

/// Which rotate button the repeat timer follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoldState {
    #[default]
    Idle,
    HeldCw,
    HeldCcw,
}

/// Repeat timer for the rotate buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoldRepeat {
    state: HoldState,
    /// Last hold-time bucket that produced a step
    last_bucket: Option<f32>,
}

impl HoldRepeat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn last_bucket(&self) -> Option<f32> {
        self.last_bucket
    }

    /// Poll the rotate buttons for this frame.
    ///
    /// Returns -1 for a clockwise step, +1 for a counter-clockwise step and 0
    /// when no step fires. Clockwise wins when both are held.
    pub fn poll(&mut self, input: &dyn ButtonInput) -> i32 {
        if input.is_held(Button::RotateCw) {
            if self.advance(HoldState::HeldCw, input.held_time(Button::RotateCw)) {
                return -1;
            }
        } else if input.is_held(Button::RotateCcw) {
            if self.advance(HoldState::HeldCcw, input.held_time(Button::RotateCcw)) {
                return 1;
            }
        } else if input.is_released(Button::RotateCw) || input.is_released(Button::RotateCcw) {
            self.state = HoldState::Idle;
            self.last_bucket = None;
        }
        0
    }

    fn advance(&mut self, state: HoldState, held_time: f32) -> bool {
        if self.state != state {
            self.state = state;
            self.last_bucket = None;
        }
        let bucket = floor_to_nearest(held_time, HOLD_REPEAT_INTERVAL);
        if self.last_bucket.is_none_or(|last| bucket > last) {
            self.last_bucket = Some(bucket);
            true
        } else {
            false
        }
    }
}

/// Step `additive` by this frame's rotate input, then round it to `step`
/// and wrap it into `[0, 360)`.
///
/// Returns the step direction that fired, if any.
pub fn apply_additive_rotation(
    additive: &mut f32,
    hold: &mut HoldRepeat,
    input: &dyn ButtonInput,
    step: f32,
) -> i32 {
    let direction = hold.poll(input);
    *additive = snap_degrees(*additive + direction as f32 * step, step);
    if direction != 0 {
        trace!("additive rotation stepped to {additive}");
    }
    direction
}
