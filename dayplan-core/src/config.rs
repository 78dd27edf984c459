//! Global dayplan configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::gesture::SnapPolicy;
use crate::store::Store;

static DEFAULT_DATA_PATH: &str = "~/.dayplan";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_snap_increment() -> i64 {
    300
}

fn default_slow_snap_increment() -> i64 {
    60
}

fn default_velocity_threshold() -> f64 {
    50.0
}

fn default_hour_height() -> f64 {
    60.0
}

fn default_tap_threshold() -> f64 {
    8.0
}

/// Configuration at ~/.config/dayplan/config.toml.
///
/// Snap and gesture values are product tunables; any positive increment is
/// supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Where event collections are stored.
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,

    /// Grid increment applied on commit, seconds.
    #[serde(default = "default_snap_increment")]
    pub snap_increment: i64,

    /// Fine increment for deliberate slow drags, seconds.
    #[serde(default = "default_slow_snap_increment")]
    pub slow_snap_increment: i64,

    /// Drag velocity (px/s) above which the coarse grid applies.
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f64,

    /// Vertical pixels per hour on the timeline.
    #[serde(default = "default_hour_height")]
    pub hour_height: f64,

    /// Pixel distance under which a gesture counts as a tap.
    #[serde(default = "default_tap_threshold")]
    pub tap_threshold: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            data_dir: default_data_path(),
            snap_increment: default_snap_increment(),
            slow_snap_increment: default_slow_snap_increment(),
            velocity_threshold: default_velocity_threshold(),
            hour_height: default_hour_height(),
            tap_threshold: default_tap_threshold(),
        }
    }
}

impl PlannerConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("dayplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first run.
    pub fn load() -> PlannerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: PlannerConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| PlannerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlannerError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/dayplan/config.toml.
    pub fn save(&self) -> PlannerResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| PlannerError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlannerResult<()> {
        let contents = format!(
            "\
# dayplan configuration

# Where your schedule is stored:
# data_dir = \"{}\"

# Commit-time snap grid, in seconds:
# snap_increment = 300

# Fine grid for slow, deliberate drags:
# slow_snap_increment = 60

# Drag velocity (px/s) above which the coarse grid applies:
# velocity_threshold = 50.0

# Timeline scale, vertical pixels per hour:
# hour_height = 60.0

# Gestures shorter than this many pixels count as taps:
# tap_threshold = 8.0
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Open the store at the configured data directory.
    pub fn open_store(&self) -> Store {
        Store::new(self.data_path())
    }

    /// Commit-time snapping parameters.
    pub fn snap_policy(&self) -> SnapPolicy {
        SnapPolicy {
            slow_increment: self.slow_snap_increment,
            fast_increment: self.snap_increment,
            velocity_threshold: self.velocity_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.snap_increment, 300);
        assert_eq!(config.slow_snap_increment, 60);
        assert_eq!(config.data_dir, PathBuf::from("~/.dayplan"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PlannerConfig = toml::from_str("snap_increment = 900").unwrap();
        assert_eq!(config.snap_increment, 900);
        assert_eq!(config.slow_snap_increment, 60);
        assert_eq!(config.hour_height, 60.0);
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = PlannerConfig::default();
        assert!(!config.data_path().to_string_lossy().contains('~'));
    }
}
