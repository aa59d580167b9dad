//! Path-step resolution for antagonist AI.
//!
//! All randomness is resolved by the caller (the movement roll and the
//! advance/retreat roll come in as plain values), so the branch table here
//! is fully deterministic and testable.

use crate::constants::STAGE_LOCATION;

/// What a moving antagonist does this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// At the door with the door open: the antagonist wins the contest.
    Attacking,
    /// At the door with the door closed: full retreat to the stage.
    RetreatedToStage,
    /// Advanced to the next node on the path.
    Advanced(u8),
    /// Fell back to the previous node on the path.
    Retreated(u8),
    /// Forced first step off the stage.
    ForcedFromStage(u8),
}

impl StepOutcome {
    /// Destination location code, if the antagonist ends up somewhere new.
    pub fn destination(&self) -> Option<u8> {
        match *self {
            StepOutcome::Attacking => None,
            StepOutcome::RetreatedToStage => Some(STAGE_LOCATION),
            StepOutcome::Advanced(code)
            | StepOutcome::Retreated(code)
            | StepOutcome::ForcedFromStage(code) => Some(code),
        }
    }
}

/// Whether a 1-20 movement roll clears the antagonist's AI level.
///
/// Rolls are drawn in `1..=20`, so levels above 20 always move and level 0
/// never moves. No clamping needed.
pub fn wants_to_move(roll: u8, ai_level: u8) -> bool {
    roll <= ai_level
}

/// Resolve one step for an antagonist that has already passed its movement
/// roll.
///
/// - `path`: the antagonist's full path, stage first, door last. Must
///   hold at least a stage node and a door node.
/// - `location`: current location code (must be a member of `path`).
/// - `door_closed`: state of the door this antagonist attacks.
/// - `advance_roll`: pre-drawn 75% advance roll, consulted only at
///   mid-path nodes.
pub fn resolve_step(path: &[u8], location: u8, door_closed: bool, advance_roll: bool) -> StepOutcome {
    debug_assert!(path.len() >= 2, "a path needs a stage and a door");
    let index = path
        .iter()
        .position(|&code| code == location)
        .unwrap_or(0);
    let last = path.len() - 1;

    if index == last {
        if door_closed {
            StepOutcome::RetreatedToStage
        } else {
            StepOutcome::Attacking
        }
    } else if index > 0 {
        if advance_roll && index < last {
            StepOutcome::Advanced(path[index + 1])
        } else {
            StepOutcome::Retreated(path[index - 1])
        }
    } else {
        StepOutcome::ForcedFromStage(path[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BLUE_PATH, DOOR_LOCATION};

    #[test]
    fn test_roll_threshold() {
        assert!(wants_to_move(1, 2));
        assert!(wants_to_move(2, 2));
        assert!(!wants_to_move(3, 2));
        // Level 0 never moves, level 21+ always does.
        assert!(!wants_to_move(1, 0));
        assert!(wants_to_move(20, 21));
    }

    #[test]
    fn test_open_door_is_an_attack() {
        let outcome = resolve_step(&BLUE_PATH, DOOR_LOCATION, false, true);
        assert_eq!(outcome, StepOutcome::Attacking);
        assert_eq!(outcome.destination(), None);
    }

    #[test]
    fn test_closed_door_retreats_to_stage() {
        let outcome = resolve_step(&BLUE_PATH, DOOR_LOCATION, true, true);
        assert_eq!(outcome, StepOutcome::RetreatedToStage);
        assert_eq!(outcome.destination(), Some(0));
    }

    #[test]
    fn test_stage_always_steps_forward() {
        // The advance roll is irrelevant on the stage.
        for advance in [true, false] {
            let outcome = resolve_step(&BLUE_PATH, 0, false, advance);
            assert_eq!(outcome, StepOutcome::ForcedFromStage(1));
        }
    }

    #[test]
    fn test_mid_path_advance_and_retreat() {
        assert_eq!(
            resolve_step(&BLUE_PATH, 5, false, true),
            StepOutcome::Advanced(7)
        );
        assert_eq!(
            resolve_step(&BLUE_PATH, 5, false, false),
            StepOutcome::Retreated(3)
        );
        assert_eq!(
            resolve_step(&BLUE_PATH, 1, false, false),
            StepOutcome::Retreated(0)
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "a path needs a stage and a door")]
    fn test_degenerate_path_is_rejected() {
        resolve_step(&[], 0, false, true);
    }

    #[test]
    fn test_destination_stays_on_path() {
        for &location in &BLUE_PATH {
            for door in [true, false] {
                for advance in [true, false] {
                    let outcome = resolve_step(&BLUE_PATH, location, door, advance);
                    if let Some(dest) = outcome.destination() {
                        assert!(BLUE_PATH.contains(&dest));
                    }
                }
            }
        }
    }
}
