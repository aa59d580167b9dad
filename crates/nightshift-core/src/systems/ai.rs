//! Antagonist AI system - probabilistic movement along fixed paths.
//!
//! Runs on its own cadence, independent of the one-second clock tick
//! (see `nightshift_logic::constants::ai_tick_interval_ms`).

use rand::Rng;

use nightshift_logic::constants::{ADVANCE_CHANCE, MAX_AI_LEVEL, STAGE_LOCATION};
use nightshift_logic::movement::{resolve_step, wants_to_move, StepOutcome};

use crate::session::{AntagonistId, Session};

/// Result of one AI tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AiReport {
    /// At least one antagonist changed location this tick.
    pub moved: bool,
    /// An antagonist found its door open; the engine must end the night.
    pub attacker: Option<AntagonistId>,
    /// An antagonist hit a closed door and fell back to the stage.
    pub door_blocked: bool,
}

/// Run one movement decision for each antagonist.
///
/// Each antagonist independently rolls 1-20 against its AI level; on a
/// pass its step is resolved by position. A successful door attack stops
/// the tick immediately - work already done stands, the rest is skipped.
pub fn antagonist_system(session: &mut Session, rng: &mut impl Rng) -> AiReport {
    let mut report = AiReport::default();

    for id in AntagonistId::ALL {
        let roll = rng.gen_range(1..=MAX_AI_LEVEL);
        if !wants_to_move(roll, session.antagonist(id).ai_level) {
            continue;
        }

        let door_closed = session.door_closed(id);
        let mid_path = {
            let antagonist = session.antagonist(id);
            !antagonist.at_stage() && !antagonist.at_door()
        };
        // The advance/retreat roll only exists at mid-path nodes.
        let advance_roll = if mid_path {
            rng.gen_bool(ADVANCE_CHANCE)
        } else {
            true
        };

        let antagonist = session.antagonist_mut(id);
        let outcome = resolve_step(&antagonist.path, antagonist.location, door_closed, advance_roll);
        match outcome {
            StepOutcome::Attacking => {
                report.attacker = Some(id);
                return report;
            }
            StepOutcome::RetreatedToStage => {
                antagonist.location = STAGE_LOCATION;
                report.moved = true;
                report.door_blocked = true;
                log::debug!("{} repelled, back to stage", id.display_name());
            }
            outcome => {
                if let Some(dest) = outcome.destination() {
                    log::debug!("{} moved {} -> {}", id.display_name(), antagonist.location, dest);
                    antagonist.location = dest;
                }
                report.moved = true;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    /// With AI level 20 every 1-20 roll passes, so movement is forced
    /// regardless of the RNG.
    fn aggressive_session(blue_ai: u8, red_ai: u8) -> Session {
        let mut session = Session::new();
        session.blue.ai_level = blue_ai;
        session.red.ai_level = red_ai;
        session
    }

    #[test]
    fn test_level_zero_never_moves() {
        let mut session = aggressive_session(0, 0);
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        for _ in 0..100 {
            let report = antagonist_system(&mut session, &mut rng);
            assert!(!report.moved);
            assert!(report.attacker.is_none());
        }
        assert!(session.blue.at_stage());
        assert!(session.red.at_stage());
    }

    #[test]
    fn test_stage_step_is_forced() {
        let mut session = aggressive_session(20, 20);
        let mut rng = StepRng::new(0, 0);

        let report = antagonist_system(&mut session, &mut rng);
        assert!(report.moved);
        assert_eq!(session.blue.location, 1);
        assert_eq!(session.red.location, 2);
    }

    #[test]
    fn test_open_door_attack_ends_tick() {
        let mut session = aggressive_session(20, 20);
        session.blue.location = 7;
        session.red.location = 2;

        let mut rng = StepRng::new(0, 0);
        let report = antagonist_system(&mut session, &mut rng);

        assert_eq!(report.attacker, Some(AntagonistId::Blue));
        // Red was skipped: the tick ended on the attack.
        assert_eq!(session.red.location, 2);
    }

    #[test]
    fn test_closed_door_retreats_to_stage() {
        let mut session = aggressive_session(20, 0);
        session.blue.location = 7;
        session.actuators.left_door_closed = true;

        let mut rng = StepRng::new(0, 0);
        let report = antagonist_system(&mut session, &mut rng);

        assert!(report.attacker.is_none());
        assert!(report.door_blocked);
        assert!(report.moved);
        assert!(session.blue.at_stage());
    }

    #[test]
    fn test_right_door_blocks_red() {
        let mut session = aggressive_session(0, 20);
        session.red.location = 7;
        session.actuators.right_door_closed = true;
        // The left door being open must not matter for red.
        session.actuators.left_door_closed = false;

        let mut rng = StepRng::new(0, 0);
        let report = antagonist_system(&mut session, &mut rng);

        assert!(report.attacker.is_none());
        assert!(session.red.at_stage());
    }

    #[test]
    fn test_locations_stay_on_path() {
        let mut session = aggressive_session(20, 20);
        session.actuators.left_door_closed = true;
        session.actuators.right_door_closed = true;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..500 {
            antagonist_system(&mut session, &mut rng);
            assert!(session.blue.path.contains(&session.blue.location));
            assert!(session.red.path.contains(&session.red.location));
        }
    }
}
