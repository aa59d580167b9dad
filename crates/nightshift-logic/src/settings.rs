//! Night configuration — defaults, the per-night table, and validation
//! for the custom-setup screen.

use serde::{Deserialize, Serialize};

use crate::constants::{night_aggression, HOUR_LENGTH_MS};

/// Immutable-for-the-run configuration of a night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Night index, 1-based. Drives base drain and AI cadence.
    pub night: u32,
    /// Aggression of the blue antagonist (left door), 0-20.
    pub blue_ai: u8,
    /// Aggression of the red antagonist (right door), 0-20.
    pub red_ai: u8,
    /// Power reserve at shift start, 0-100.
    pub starting_power: u8,
    /// Real-time milliseconds per in-game hour.
    pub hour_length_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::for_night(1)
    }
}

impl GameSettings {
    /// Standard-night settings from the hand-tuned aggression table.
    pub fn for_night(night: u32) -> Self {
        let (blue_ai, red_ai) = night_aggression(night);
        Self {
            night,
            blue_ai,
            red_ai,
            starting_power: 100,
            hour_length_ms: HOUR_LENGTH_MS,
        }
    }

    /// Validate custom settings, returning all problems found.
    ///
    /// The custom-setup collaborator calls this before handing settings to
    /// the engine; the engine itself does not re-validate. Out-of-range AI
    /// levels are deliberately not errors: the 1-20 roll range makes levels
    /// above 20 behave as always-move.
    pub fn validate(&self) -> Vec<SettingsError> {
        let mut errors = Vec::new();
        if self.night == 0 {
            errors.push(SettingsError::NightZero);
        }
        if self.starting_power > 100 {
            errors.push(SettingsError::PowerOutOfRange(self.starting_power));
        }
        if self.hour_length_ms == 0 {
            errors.push(SettingsError::ZeroHourLength);
        }
        errors
    }
}

/// Problems with a custom night configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    NightZero,
    PowerOutOfRange(u8),
    ZeroHourLength,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::NightZero => write!(f, "Night index must be at least 1"),
            SettingsError::PowerOutOfRange(p) => {
                write!(f, "Starting power must be 0-100, got {}", p)
            }
            SettingsError::ZeroHourLength => write!(f, "Hour length must be positive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_night_one() {
        let settings = GameSettings::default();
        assert_eq!(settings.night, 1);
        assert_eq!(settings.blue_ai, 2);
        assert_eq!(settings.red_ai, 1);
        assert_eq!(settings.starting_power, 100);
        assert_eq!(settings.hour_length_ms, 8000);
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(GameSettings::for_night(3).validate().is_empty());
    }

    #[test]
    fn test_invalid_settings_collect_all_errors() {
        let settings = GameSettings {
            night: 0,
            blue_ai: 20,
            red_ai: 20,
            starting_power: 150,
            hour_length_ms: 0,
        };
        let errors = settings.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&SettingsError::NightZero));
        assert!(errors.contains(&SettingsError::PowerOutOfRange(150)));
        assert!(errors.contains(&SettingsError::ZeroHourLength));
    }
}
