//! Game settings and rules
//!
//! Persisted as JSON next to the binary (or wherever `--config` points).
//! Missing fields fall back to their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::{RESTART_DELAY, STARTING_LIFE, WIN_POINTS};

/// Win/lose thresholds and the end-screen delay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Lives at the start of each run
    pub starting_life: i32,
    /// Food needed to win
    pub win_points: i32,
    /// Seconds on the GameOver/Win screen before returning to the menu
    pub restart_delay: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_life: STARTING_LIFE,
            win_points: WIN_POINTS,
            restart_delay: RESTART_DELAY,
        }
    }
}

impl Rules {
    /// Reject rules that would skip or stall a phase
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.starting_life >= 1,
            "starting_life must be at least 1, got {}",
            self.starting_life
        );
        ensure!(
            self.win_points >= 1,
            "win_points must be at least 1, got {}",
            self.win_points
        );
        ensure!(
            self.restart_delay.is_finite() && self.restart_delay >= 0.0,
            "restart_delay must be a finite number of seconds >= 0, got {}",
            self.restart_delay
        );
        Ok(())
    }

    /// Clamp every field into its valid range
    pub fn sanitized(self) -> Self {
        if let Err(e) = self.validate() {
            log::warn!("Clamping rules: {e}");
        }
        let restart_delay = if self.restart_delay.is_finite() {
            self.restart_delay.max(0.0)
        } else {
            RESTART_DELAY
        };
        Self {
            starting_life: self.starting_life.max(1),
            win_points: self.win_points.max(1),
            restart_delay,
        }
    }
}

/// Runner preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rules: Rules,
    /// Fixed seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    /// Simulated frames per second
    pub fps: u32,
    /// Log the HUD text whenever it changes
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            seed: None,
            fps: 60,
            show_hud: true,
        }
    }
}

impl Settings {
    /// Seconds per simulated frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Frames needed to simulate `seconds`
    pub fn frame_count(&self, seconds: f32) -> Result<u64> {
        ensure!(
            seconds.is_finite() && seconds >= 0.0,
            "seconds must be a finite, non-negative number, got {seconds}"
        );
        Ok((seconds / self.frame_dt()).round() as u64)
    }

    /// Load settings from a JSON file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&json)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        settings
            .rules
            .validate()
            .with_context(|| format!("invalid rules in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.seed = Some(77);
        settings.rules.win_points = 5;
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "rules": { "starting_life": 1 }, "fps": 30 }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.rules.starting_life, 1);
        assert_eq!(settings.rules.win_points, WIN_POINTS);
        assert_eq!(settings.fps, 30);
        assert!(settings.seed.is_none());
        assert!((settings.frame_dt() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_rules_are_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        for rules in [
            r#"{ "starting_life": 0 }"#,
            r#"{ "win_points": -2 }"#,
            r#"{ "restart_delay": -1.0 }"#,
        ] {
            fs::write(&path, format!(r#"{{ "rules": {rules} }}"#)).unwrap();
            let err = Settings::load_from(&path).unwrap_err();
            assert!(format!("{err:#}").contains("invalid rules"), "{rules}");
        }
    }

    #[test]
    fn sanitized_clamps_each_field() {
        let rules = Rules {
            starting_life: -4,
            win_points: 0,
            restart_delay: f32::NAN,
        }
        .sanitized();
        assert_eq!(rules.starting_life, 1);
        assert_eq!(rules.win_points, 1);
        assert_eq!(rules.restart_delay, RESTART_DELAY);
        assert!(rules.validate().is_ok());

        let negative = Rules {
            restart_delay: -0.5,
            ..Rules::default()
        };
        assert_eq!(negative.sanitized().restart_delay, 0.0);
        assert_eq!(Rules::default().sanitized(), Rules::default());
    }

    #[test]
    fn frame_count_rejects_non_finite_durations() {
        let settings = Settings::default();
        assert_eq!(settings.frame_count(2.5).unwrap(), 150);
        assert_eq!(settings.frame_count(0.0).unwrap(), 0);
        assert!(settings.frame_count(f32::INFINITY).is_err());
        assert!(settings.frame_count(f32::NAN).is_err());
        assert!(settings.frame_count(-1.0).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }
}
