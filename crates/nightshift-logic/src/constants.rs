//! Game constants — path topology, aggression table, tick cadences.
//!
//! Plain data shared by the engine and the headless simtest.

/// Location codes an antagonist occupies, stage (0) through door (7).
/// The two paths are disjoint apart from the shared endpoints.
pub const BLUE_PATH: [u8; 5] = [0, 1, 3, 5, 7];
pub const RED_PATH: [u8; 5] = [0, 2, 4, 6, 7];

/// Location code of the stage (safe starting node).
pub const STAGE_LOCATION: u8 = 0;

/// Location code of the door (contested terminal node).
pub const DOOR_LOCATION: u8 = 7;

/// The shift runs from hour 0 (midnight) to hour 6.
pub const NIGHT_HOURS: f64 = 6.0;

/// Default real-time milliseconds per in-game hour (48 s night).
pub const HOUR_LENGTH_MS: u64 = 8000;

/// Presentation delay between the night intro and active play.
pub const INTRO_DELAY_MS: u64 = 4000;

/// Cadence of the time/power tick.
pub const CLOCK_TICK_MS: u64 = 1000;

/// Duration of the camera disturbance raised when an antagonist moves
/// while the monitor is open.
pub const CAMERA_STATIC_MS: u64 = 500;

/// Completing this night shows the ending instead of the continue screen.
pub const FINAL_NIGHT: u32 = 5;

/// Movement rolls are drawn in `1..=MAX_AI_LEVEL`.
pub const MAX_AI_LEVEL: u8 = 20;

/// Chance per one-second tick, while blacked out, of losing the night.
pub const BLACKOUT_ATTACK_CHANCE: f64 = 0.2;

/// Chance a moving antagonist at a mid-path node advances rather than
/// retreats.
pub const ADVANCE_CHANCE: f64 = 0.75;

/// Default aggression levels for a standard night (1-5).
///
/// Returns `(blue, red)`. Night 6+ (and anything unrecognized) is the
/// maximum-difficulty 20/20 pair.
pub fn night_aggression(night: u32) -> (u8, u8) {
    match night {
        1 => (2, 1),
        2 => (6, 4),
        3 => (8, 8),
        4 => (12, 10),
        5 => (16, 15),
        _ => (20, 20),
    }
}

/// Milliseconds between AI movement decisions. Higher nights decide
/// faster, floored at 2 seconds.
pub fn ai_tick_interval_ms(night: u32) -> u64 {
    5000u64.saturating_sub(night as u64 * 500).max(2000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggression_table() {
        assert_eq!(night_aggression(1), (2, 1));
        assert_eq!(night_aggression(5), (16, 15));
        assert_eq!(night_aggression(6), (20, 20));
        assert_eq!(night_aggression(99), (20, 20));
    }

    #[test]
    fn test_ai_cadence_scales_with_night() {
        assert_eq!(ai_tick_interval_ms(1), 4500);
        assert_eq!(ai_tick_interval_ms(5), 2500);
        // Floored at 2000 from night 6 on, even for absurd nights.
        assert_eq!(ai_tick_interval_ms(6), 2000);
        assert_eq!(ai_tick_interval_ms(1000), 2000);
    }

    #[test]
    fn test_paths_share_only_endpoints() {
        assert_eq!(BLUE_PATH[0], STAGE_LOCATION);
        assert_eq!(RED_PATH[0], STAGE_LOCATION);
        assert_eq!(*BLUE_PATH.last().unwrap(), DOOR_LOCATION);
        assert_eq!(*RED_PATH.last().unwrap(), DOOR_LOCATION);
        for code in &BLUE_PATH[1..4] {
            assert!(!RED_PATH.contains(code));
        }
    }
}
