//! Runtime settings
//!
//! Loaded from a JSON file next to the executable's working directory.
//! Missing fields take their defaults, so a settings file only needs the
//! values it changes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::highscores::DEFAULT_HIGH_SCORE_FILE;
use crate::tuning::Tuning;

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "tron_rider.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid tuning in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the sprite files
    pub asset_dir: PathBuf,
    /// Plain-text high score file
    pub high_score_path: PathBuf,
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
    /// Tick cap for the headless demo run
    pub demo_max_ticks: u64,
    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
            seed: None,
            demo_max_ticks: 60 * 60 * 5,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings
            .tuning
            .validate()
            .map_err(|reason| SettingsError::Invalid {
                path: path.to_path_buf(),
                reason,
            })?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tron_rider.json");
        fs::write(&path, r#"{ "seed": 9, "tuning": { "boost_multiplier": 1.5 } }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.tuning.boost_multiplier, 1.5);
        assert_eq!(settings.tuning.max_fuel, 100.0);
        assert_eq!(settings.asset_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tron_rider.json");
        fs::write(&path, "{ seed: ").unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Parse { .. })));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tron_rider.json");
        fs::write(&path, r#"{ "tuning": { "max_fuel": -1.0 } }"#).unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("max_fuel"));
    }

    #[test]
    fn test_ramp_breaking_tuning_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tron_rider.json");

        fs::write(&path, r#"{ "tuning": { "speed_up_interval_ms": 1e-9 } }"#).unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("speed_up_interval_ms"));

        fs::write(&path, r#"{ "tuning": { "speed_increment": -1.0 } }"#).unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("speed_increment"));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tron_rider.json");
        let settings = Settings {
            seed: Some(1234),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
