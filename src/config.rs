/// Game settings
///
/// Read once at startup from a JSON file.  Every field has a default, so a
/// missing file or a partial file is fine; a malformed one is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "ARCADE_CONFIG";
const CONFIG_FILE_NAME: &str = ".portfolio_arcade.json";

/// Shooter tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterRules {
    /// Milliseconds between target spawns.
    pub spawn_interval_ms: u64,
    /// Milliseconds between physics steps.
    pub physics_interval_ms: u64,
    /// Pixels a bullet climbs per physics step.
    pub bullet_speed: f32,
    /// Pixels a target falls per physics step.  Zero keeps targets parked
    /// at the spawn row.
    pub target_fall_speed: f32,
    /// Oldest targets are dropped once the field holds more than this.
    pub max_targets: usize,
    /// Whether `fire` still adds bullets after the game is won.
    pub fire_after_win: bool,
    /// Upper bound on events a single timer may fire per `tick`.
    pub max_catch_up: u32,
}

impl Default for ShooterRules {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 1000,
            physics_interval_ms: 50,
            bullet_speed: 10.0,
            target_fall_speed: 0.0,
            max_targets: 256,
            fire_after_win: false,
            max_catch_up: 64,
        }
    }
}

/// Falling-block tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TetrisRules {
    /// Milliseconds between gravity steps.
    pub gravity_interval_ms: u64,
    pub max_catch_up: u32,
}

impl Default for TetrisRules {
    fn default() -> Self {
        Self {
            gravity_interval_ms: 1000,
            max_catch_up: 8,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shooter: ShooterRules,
    pub tetris: TetrisRules,
    /// Fixed RNG seed.  `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Log destination.  `None` logs beside the settings file.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting: {0}")]
    Invalid(&'static str),
}

impl Settings {
    /// Settings path: `$ARCADE_CONFIG`, else `$HOME/.portfolio_arcade.json`.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(CONFIG_FILE_NAME)
    }

    /// Where logs go: `log_file` if set, else the settings path with a
    /// `.log` extension.  The terminal is in raw mode while playing, so
    /// logs never go to stderr.
    pub fn log_path(&self, settings_path: &Path) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| settings_path.with_extension("log"))
    }

    /// Load and validate settings from `path`.  A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let settings = Self::from_json(&json).map_err(|e| match e {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| SettingsError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let s = &self.shooter;
        if s.spawn_interval_ms == 0 {
            return Err(SettingsError::Invalid("shooter.spawn_interval_ms must be > 0"));
        }
        if s.physics_interval_ms == 0 {
            return Err(SettingsError::Invalid("shooter.physics_interval_ms must be > 0"));
        }
        if s.bullet_speed.is_nan() || s.bullet_speed <= 0.0 {
            return Err(SettingsError::Invalid("shooter.bullet_speed must be > 0"));
        }
        if s.target_fall_speed < 0.0 || !s.target_fall_speed.is_finite() {
            return Err(SettingsError::Invalid("shooter.target_fall_speed must be >= 0"));
        }
        if s.max_targets == 0 {
            return Err(SettingsError::Invalid("shooter.max_targets must be > 0"));
        }
        if s.max_catch_up == 0 || self.tetris.max_catch_up == 0 {
            return Err(SettingsError::Invalid("max_catch_up must be > 0"));
        }
        if self.tetris.gravity_interval_ms == 0 {
            return Err(SettingsError::Invalid("tetris.gravity_interval_ms must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        let s = Settings::from_json("{}").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let s = Settings::from_json(r#"{ "shooter": { "target_fall_speed": 2.5 } }"#).unwrap();
        assert_eq!(s.shooter.target_fall_speed, 2.5);
        assert_eq!(s.shooter.spawn_interval_ms, 1000);
        assert_eq!(s.tetris, TetrisRules::default());
    }

    #[test]
    fn zero_physics_interval_rejected() {
        let err = Settings::from_json(r#"{ "shooter": { "physics_interval_ms": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn log_defaults_beside_settings_file() {
        let s = Settings::default();
        assert_eq!(
            s.log_path(Path::new("/home/me/.portfolio_arcade.json")),
            PathBuf::from("/home/me/.portfolio_arcade.log")
        );
    }

    #[test]
    fn explicit_log_file_wins() {
        let s = Settings::from_json(r#"{ "log_file": "/tmp/arcade.log" }"#).unwrap();
        assert_eq!(
            s.log_path(Path::new("/home/me/.portfolio_arcade.json")),
            PathBuf::from("/tmp/arcade.log")
        );
    }

    #[test]
    fn garbage_is_parse_error() {
        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
