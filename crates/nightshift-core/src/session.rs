//! Session state - the single authoritative snapshot of a game run.
//!
//! Pure data; the tick systems and the engine own all behavior.

use serde::{Deserialize, Serialize};

use nightshift_logic::constants::{BLUE_PATH, DOOR_LOCATION, RED_PATH, STAGE_LOCATION};
use nightshift_logic::power::Actuators;
use nightshift_logic::settings::GameSettings;

/// State-machine phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Start,
    CustomSetup,
    NightIntro,
    /// Active play. The only phase in which the tick families run.
    Game,
    Jumpscare,
    Win,
    Ending,
}

/// Which office side a door or light is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// The two antagonists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntagonistId {
    Blue,
    Red,
}

impl AntagonistId {
    pub const ALL: [AntagonistId; 2] = [AntagonistId::Blue, AntagonistId::Red];

    /// The door this antagonist attacks.
    pub fn door_side(self) -> Side {
        match self {
            AntagonistId::Blue => Side::Left,
            AntagonistId::Red => Side::Right,
        }
    }

    /// Fixed stage-to-door path for this antagonist.
    pub fn path(self) -> &'static [u8] {
        match self {
            AntagonistId::Blue => &BLUE_PATH,
            AntagonistId::Red => &RED_PATH,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AntagonistId::Blue => "Unit-01",
            AntagonistId::Red => "Unit-02",
        }
    }
}

/// Why a night ended in a jumpscare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    DoorAttack,
    PowerOutage,
}

/// One antagonist's state for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Antagonist {
    /// Current location code. Always a member of `path`.
    pub location: u8,
    /// Ordered location codes, stage first, door last.
    pub path: Vec<u8>,
    /// Movement aggression for this run, nominally 0-20.
    pub ai_level: u8,
}

impl Antagonist {
    pub fn new(id: AntagonistId, ai_level: u8) -> Self {
        Self {
            location: STAGE_LOCATION,
            path: id.path().to_vec(),
            ai_level,
        }
    }

    /// Index of the current location within the path.
    pub fn path_index(&self) -> usize {
        self.path
            .iter()
            .position(|&code| code == self.location)
            .unwrap_or(0)
    }

    pub fn at_stage(&self) -> bool {
        self.location == STAGE_LOCATION
    }

    pub fn at_door(&self) -> bool {
        self.location == DOOR_LOCATION
    }
}

/// The authoritative mutable session snapshot.
///
/// Created fresh at shift start; the rendering layer polls it (or a JSON
/// serialization of it) every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub view: View,
    pub settings: GameSettings,
    /// Elapsed in-game hours, 0 to 6. Hour 6 ends the shift.
    pub time: f64,
    /// Remaining power, 0 to 100. Non-increasing while the shift runs.
    pub power: f64,
    /// Discrete drain indicator, recomputed every clock tick.
    pub usage_level: u8,
    pub actuators: Actuators,
    pub blue: Antagonist,
    pub red: Antagonist,
    /// Transient camera disturbance raised when an antagonist moves while
    /// the monitor is open.
    pub camera_static: bool,
    pub jumpscare_source: Option<AntagonistId>,
    pub jumpscare_cause: Option<FailureCause>,
}

impl Session {
    /// An idle session on the title screen.
    pub fn new() -> Self {
        let settings = GameSettings::default();
        Self {
            view: View::Start,
            settings,
            time: 0.0,
            power: settings.starting_power as f64,
            usage_level: 1,
            actuators: Actuators::default(),
            blue: Antagonist::new(AntagonistId::Blue, settings.blue_ai),
            red: Antagonist::new(AntagonistId::Red, settings.red_ai),
            camera_static: false,
            jumpscare_source: None,
            jumpscare_cause: None,
        }
    }

    /// Reset all simulation state for a fresh shift under the current
    /// settings. The engine flips `view` separately.
    pub fn reset_for_shift(&mut self) {
        self.time = 0.0;
        self.power = self.settings.starting_power as f64;
        self.usage_level = 1;
        self.actuators.reset();
        self.camera_static = false;
        self.jumpscare_source = None;
        self.jumpscare_cause = None;
        self.blue = Antagonist::new(AntagonistId::Blue, self.settings.blue_ai);
        self.red = Antagonist::new(AntagonistId::Red, self.settings.red_ai);
    }

    pub fn antagonist(&self, id: AntagonistId) -> &Antagonist {
        match id {
            AntagonistId::Blue => &self.blue,
            AntagonistId::Red => &self.red,
        }
    }

    pub fn antagonist_mut(&mut self, id: AntagonistId) -> &mut Antagonist {
        match id {
            AntagonistId::Blue => &mut self.blue,
            AntagonistId::Red => &mut self.red,
        }
    }

    /// State of the door the given antagonist attacks.
    pub fn door_closed(&self, id: AntagonistId) -> bool {
        match id.door_side() {
            Side::Left => self.actuators.left_door_closed,
            Side::Right => self.actuators.right_door_closed,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.view, View::Start);
        assert_eq!(session.time, 0.0);
        assert!(session.blue.at_stage());
        assert!(session.red.at_stage());
        assert_eq!(session.actuators, Actuators::default());
    }

    #[test]
    fn test_reset_for_shift_clears_run_state() {
        let mut session = Session::new();
        session.settings = GameSettings::for_night(3);
        session.time = 4.5;
        session.power = 12.0;
        session.actuators.left_door_closed = true;
        session.blue.location = 7;
        session.jumpscare_source = Some(AntagonistId::Red);

        session.reset_for_shift();

        assert_eq!(session.time, 0.0);
        assert_eq!(session.power, 100.0);
        assert!(!session.actuators.left_door_closed);
        assert!(session.blue.at_stage());
        assert_eq!(session.blue.ai_level, 8);
        assert_eq!(session.jumpscare_source, None);
    }

    #[test]
    fn test_antagonist_path_index() {
        let mut blue = Antagonist::new(AntagonistId::Blue, 2);
        assert_eq!(blue.path_index(), 0);
        blue.location = 5;
        assert_eq!(blue.path_index(), 3);
        blue.location = 7;
        assert!(blue.at_door());
    }

    #[test]
    fn test_door_sides() {
        assert_eq!(AntagonistId::Blue.door_side(), Side::Left);
        assert_eq!(AntagonistId::Red.door_side(), Side::Right);

        let mut session = Session::new();
        session.actuators.right_door_closed = true;
        assert!(!session.door_closed(AntagonistId::Blue));
        assert!(session.door_closed(AntagonistId::Red));
    }

    #[test]
    fn test_session_serializes_to_json() {
        let session = Session::new();
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"view\":\"start\""));
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
