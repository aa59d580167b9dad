//! Clock system - advances the in-game hour once per one-second tick.

use nightshift_logic::constants::{CLOCK_TICK_MS, NIGHT_HOURS};

use crate::session::Session;

/// Result of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReport {
    /// Hour 6 was reached this tick; the shift is over and the rest of the
    /// tick must not run.
    pub shift_complete: bool,
}

/// Advance `time` by one tick's worth of hours, clamping at hour 6.
///
/// The engine guards this behind the active-play predicate; when the phase
/// is wrong or the pause flag is set the tick simply never fires, so time
/// resumes where it left off with no catch-up.
pub fn clock_system(session: &mut Session) -> ClockReport {
    let increment = CLOCK_TICK_MS as f64 / session.settings.hour_length_ms as f64;
    session.time += increment;

    if session.time >= NIGHT_HOURS {
        session.time = NIGHT_HOURS;
        ClockReport {
            shift_complete: true,
        }
    } else {
        ClockReport {
            shift_complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_follows_hour_length() {
        let mut session = Session::new();
        session.settings.hour_length_ms = 8000;

        let report = clock_system(&mut session);
        assert!(!report.shift_complete);
        assert!((session.time - 0.125).abs() < 1e-9);
    }

    #[test]
    fn test_shift_completes_at_hour_six() {
        let mut session = Session::new();
        session.settings.hour_length_ms = 8000;

        // 48 ticks of 0.125 hours reach exactly hour 6.
        for tick in 1..=48 {
            let report = clock_system(&mut session);
            assert_eq!(report.shift_complete, tick == 48);
        }
        assert_eq!(session.time, NIGHT_HOURS);
    }

    #[test]
    fn test_time_clamps_at_six() {
        let mut session = Session::new();
        session.settings.hour_length_ms = 1000;
        session.time = 5.5;

        let report = clock_system(&mut session);
        assert!(report.shift_complete);
        assert_eq!(session.time, 6.0);
    }
}
