//! Power drain and usage-level logic.
//!
//! Drain is evaluated once per one-second clock tick from the current
//! actuator states and subtracted from the night's power reserve.

use serde::{Deserialize, Serialize};

/// Player-controlled office actuators.
///
/// All false at shift start and forced false again on blackout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actuators {
    pub left_door_closed: bool,
    pub right_door_closed: bool,
    pub left_light_on: bool,
    pub right_light_on: bool,
    pub camera_open: bool,
}

impl Actuators {
    pub fn any_light_on(&self) -> bool {
        self.left_light_on || self.right_light_on
    }

    /// Force everything off (shift start, blackout).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Base drain per second before actuators: 0.15 plus 0.05 per night.
const BASE_DRAIN: f64 = 0.15;
const NIGHT_DRAIN_STEP: f64 = 0.05;

const DOOR_DRAIN: f64 = 0.3;
const LIGHT_DRAIN: f64 = 0.5;
const CAMERA_DRAIN: f64 = 0.3;

/// Power drained this second by the given actuator states.
pub fn compute_drain(actuators: &Actuators, night: u32) -> f64 {
    let mut drain = BASE_DRAIN + NIGHT_DRAIN_STEP * night as f64;
    if actuators.left_door_closed {
        drain += DOOR_DRAIN;
    }
    if actuators.right_door_closed {
        drain += DOOR_DRAIN;
    }
    if actuators.left_light_on {
        drain += LIGHT_DRAIN;
    }
    if actuators.right_light_on {
        drain += LIGHT_DRAIN;
    }
    if actuators.camera_open {
        drain += CAMERA_DRAIN;
    }
    drain
}

/// Discrete usage indicator derived from instantaneous drain.
///
/// Raw ceiling of `drain * 4`; the display layer only distinguishes the
/// first five bars.
pub fn usage_level(drain: f64) -> u8 {
    (drain * 4.0).ceil() as u8
}

/// Subtract drain from the reserve, clamped at zero.
pub fn apply_drain(power: f64, drain: f64) -> f64 {
    (power - drain).max(0.0)
}
