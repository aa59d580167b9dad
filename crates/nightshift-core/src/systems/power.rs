//! Power system - applies per-second drain and handles the blackout.

use rand::Rng;

use nightshift_logic::constants::BLACKOUT_ATTACK_CHANCE;
use nightshift_logic::power::{apply_drain, compute_drain, usage_level};

use crate::session::Session;

/// Result of one power tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerReport {
    /// Power crossed to zero this tick: all actuators were forced off.
    pub blackout_started: bool,
    /// The recurring blackout loss chance fired this tick.
    pub outage_attack: bool,
}

/// Apply one second of drain to the session.
///
/// The outage roll uses the power level the tick *began* with, so the
/// crossing tick itself never rolls; the first roll happens one tick
/// later. While blacked out the actuators stay forced off because the
/// command handlers refuse input at zero power.
pub fn power_system(session: &mut Session, rng: &mut impl Rng) -> PowerReport {
    let pre_tick_power = session.power;

    let drain = compute_drain(&session.actuators, session.settings.night);
    session.usage_level = usage_level(drain);
    session.power = apply_drain(pre_tick_power, drain);

    let blackout_started = pre_tick_power > 0.0 && session.power <= 0.0;
    if blackout_started {
        session.actuators.reset();
    }

    let outage_attack = pre_tick_power <= 0.0 && rng.gen::<f64>() < BLACKOUT_ATTACK_CHANCE;

    PowerReport {
        blackout_started,
        outage_attack,
    }
}
