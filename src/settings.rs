//! Game settings and balance
//!
//! Loaded from `appledroid.json` in the working directory when present.
//! Every field falls back to its default, so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{AppError, SimError};
use crate::sim::ExclusionMode;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: u32,
    pub screen_height: u32,
    pub frame_rate: u32,

    // === Round ===
    /// Countdown budget at round start (seconds)
    pub countdown_default: f64,
    pub primary_bonus: f64,
    pub secondary_bonus: f64,

    // === Gold apple ===
    /// Probability (0.0 - 1.0) that an absent gold apple appears at a check
    pub secondary_spawn_chance: f64,
    /// Seconds between spawn/despawn checks
    pub secondary_check_interval: f64,

    // === Spawn placement ===
    pub edge_margin: f32,
    pub text_margin: f32,
    pub player_margin: f32,
    pub exclusion_mode: ExclusionMode,
    pub spawn_retry_cap: u32,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,

    // === Player / input ===
    pub player_speed: f32,
    pub input_debounce: f64,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            frame_rate: FRAME_RATE,

            countdown_default: COUNTDOWN_DEFAULT,
            primary_bonus: PRIMARY_TIME_BONUS,
            secondary_bonus: SECONDARY_TIME_BONUS,

            secondary_spawn_chance: SECONDARY_SPAWN_CHANCE,
            secondary_check_interval: SECONDARY_CHECK_INTERVAL,

            edge_margin: EDGE_MARGIN,
            text_margin: TEXT_MARGIN,
            player_margin: PLAYER_MARGIN,
            exclusion_mode: ExclusionMode::Loose,
            spawn_retry_cap: SPAWN_RETRY_CAP,
            seed: None,

            player_speed: PLAYER_SPEED,
            input_debounce: INPUT_DEBOUNCE,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "appledroid.json";

    /// Load settings from `appledroid.json`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read and parse a settings file
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values that would break the round clock or spawn math
    pub fn validate(&self) -> Result<(), SimError> {
        let fail = |msg: String| Err(SimError::Configuration(msg));

        if self.screen_width == 0 || self.screen_height == 0 {
            return fail(format!(
                "screen must be non-empty, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.frame_rate == 0 {
            return fail("frame_rate must be positive".into());
        }
        if self.countdown_default <= 0.0 {
            return fail(format!(
                "countdown_default must be positive, got {}",
                self.countdown_default
            ));
        }
        if self.primary_bonus < 0.0 || self.secondary_bonus < 0.0 {
            return fail("time bonuses must not be negative".into());
        }
        if !(0.0..=1.0).contains(&self.secondary_spawn_chance) {
            return fail(format!(
                "secondary_spawn_chance must be within 0.0-1.0, got {}",
                self.secondary_spawn_chance
            ));
        }
        if self.secondary_check_interval <= 0.0 {
            return fail(format!(
                "secondary_check_interval must be positive, got {}",
                self.secondary_check_interval
            ));
        }
        if self.edge_margin < 0.0 || self.text_margin < 0.0 || self.player_margin < 0.0 {
            return fail("spawn margins must not be negative".into());
        }
        if self.spawn_retry_cap == 0 {
            return fail("spawn_retry_cap must be at least 1".into());
        }
        Ok(())
    }

    /// Seconds per frame at the configured frame rate
    pub fn frame_duration(&self) -> f64 {
        1.0 / self.frame_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.countdown_default, 10.0);
        assert_eq!(settings.secondary_bonus, 2.0 * settings.primary_bonus);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "secondary_spawn_chance": 0.25, "seed": 7 }"#)
            .expect("valid json");
        assert_eq!(settings.secondary_spawn_chance, 0.25);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert_eq!(settings.exclusion_mode, ExclusionMode::Loose);
    }

    #[test]
    fn test_exclusion_mode_from_json() {
        let settings = Settings::from_json(r#"{ "exclusion_mode": "Strict" }"#).expect("valid json");
        assert_eq!(settings.exclusion_mode, ExclusionMode::Strict);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(AppError::Json(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_chance() {
        let settings = Settings {
            secondary_spawn_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SimError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let settings = Settings {
            secondary_check_interval: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_frame_duration() {
        let settings = Settings {
            frame_rate: 50,
            ..Default::default()
        };
        assert!((settings.frame_duration() - 0.02).abs() < 1e-12);
    }
}
