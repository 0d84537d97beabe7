//! User settings for Go Budgeting
//!
//! Preferences that shape the wizard: how long the validation banner stays
//! up, how often the terminal ticks, and where and how reports are exported.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::export::ExportFormat;
use crate::models::HouseholdMode;

/// User settings for Go Budgeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Seconds before the validation banner dismisses itself
    #[serde(default = "default_alert_dismiss_secs")]
    pub alert_dismiss_secs: u64,

    /// Terminal tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Format used when exporting without an explicit choice
    #[serde(default)]
    pub default_export_format: ExportFormat,

    /// Where reports are written (defaults to `<base>/exports`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Household mode preselected on the configuration step
    #[serde(default)]
    pub default_household: HouseholdMode,
}

fn default_schema_version() -> u32 {
    1
}

fn default_alert_dismiss_secs() -> u64 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            alert_dismiss_secs: default_alert_dismiss_secs(),
            tick_rate_ms: default_tick_rate_ms(),
            default_export_format: ExportFormat::default(),
            export_dir: None,
            default_household: HouseholdMode::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Defaults stay in memory until the caller saves them
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Directory reports are exported into
    pub fn export_dir(&self, paths: &BudgetPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.exports_dir())
    }

    pub fn alert_dismiss_after(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.alert_dismiss_secs)
    }

    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
