//! Host-supplied configuration for the calendar surface.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AGENDA_DAYS, DEFAULT_END_HOUR, DEFAULT_HOUR_HEIGHT, DEFAULT_START_HOUR,
};
use crate::error::{CalGridError, CalGridResult};

fn default_week_start() -> Weekday {
    Weekday::Mon
}

fn default_start_hour() -> u32 {
    DEFAULT_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_END_HOUR
}

fn default_hour_height() -> f32 {
    DEFAULT_HOUR_HEIGHT
}

fn default_agenda_days() -> u32 {
    DEFAULT_AGENDA_DAYS
}

/// Configuration at ~/.config/calgrid/config.toml
///
/// The snap granularity is deliberately not configurable; gestures
/// always quantize to the fixed 15-minute grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Weekday the week and month grids start on.
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,

    /// Visible hour range `[start_hour, end_hour)` for day/week grids.
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,

    /// Rendered height of one hour, in pixels.
    #[serde(default = "default_hour_height")]
    pub hour_height: f32,

    /// Number of consecutive days an agenda window covers.
    #[serde(default = "default_agenda_days")]
    pub agenda_days: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            week_start: default_week_start(),
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            hour_height: default_hour_height(),
            agenda_days: default_agenda_days(),
        }
    }
}

impl CalendarConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the given path, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> CalGridResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: CalendarConfig =
            toml::from_str(&content).map_err(|e| CalGridError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> CalGridResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CalGridError::Config(e.to_string()))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> CalGridResult<()> {
        if self.start_hour >= self.end_hour {
            return Err(CalGridError::Config(format!(
                "Hour range is empty: [{}, {})",
                self.start_hour, self.end_hour
            )));
        }
        if self.end_hour > 24 {
            return Err(CalGridError::Config(format!(
                "end_hour must be at most 24, got {}",
                self.end_hour
            )));
        }
        if self.hour_height <= 0.0 {
            return Err(CalGridError::Config(format!(
                "hour_height must be positive, got {}",
                self.hour_height
            )));
        }
        if self.agenda_days == 0 {
            return Err(CalGridError::Config(
                "agenda_days must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
