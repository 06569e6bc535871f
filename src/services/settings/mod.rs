// Scheduler settings
// Caller-supplied configuration for the scheduling core; the embedding
// application reads the file, this module parses and validates the text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::drag::GridConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings document: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid grid geometry: {0}")]
    InvalidGrid(String),
}

/// Configuration for the scheduling core.
///
/// Every field has a default, so an empty document is valid and partial
/// documents fill in the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    pub grid: GridConfig,
    /// Per-tenant toggle for overlap detection.
    pub conflict_detection: bool,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            conflict_detection: true,
        }
    }
}

impl SchedulerSettings {
    /// Parse and validate a TOML settings document.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the grid geometry for values the pixel math cannot work with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let grid = &self.grid;
        if grid.hour_height <= 0.0 {
            return Err(SettingsError::InvalidGrid(format!(
                "hour_height must be positive, got {}",
                grid.hour_height
            )));
        }
        if grid.snap_interval_minutes <= 0 {
            return Err(SettingsError::InvalidGrid(format!(
                "snap_interval_minutes must be positive, got {}",
                grid.snap_interval_minutes
            )));
        }
        if grid.min_duration_minutes <= 0 {
            return Err(SettingsError::InvalidGrid(format!(
                "min_duration_minutes must be positive, got {}",
                grid.min_duration_minutes
            )));
        }
        if grid.end_hour > 24 {
            return Err(SettingsError::InvalidGrid(format!(
                "end_hour must be at most 24, got {}",
                grid.end_hour
            )));
        }
        if grid.start_hour >= grid.end_hour {
            return Err(SettingsError::InvalidGrid(format!(
                "start_hour {} must be before end_hour {}",
                grid.start_hour, grid.end_hour
            )));
        }
        Ok(())
    }
}
