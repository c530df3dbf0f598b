//! Configuration management module
//!
//! Handles loading, saving, and validation of the tracker configuration:
//! earnings goal thresholds and the display locale. Configuration sets
//! session constants only; tracked amounts are never written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Goals;
use crate::util::Locale;
use crate::{Result, TrackerError, APP_NAME, CONFIG_FILE};

/// Tracker configuration: goal thresholds and display locale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Daily earnings goal
    pub daily_goal: Decimal,
    /// Weekly earnings goal
    pub weekly_goal: Decimal,
    /// Monthly earnings goal
    pub monthly_goal: Decimal,
    /// Display locale for all labels
    pub locale: Locale,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let goals = Goals::default();
        Self {
            daily_goal: goals.daily,
            weekly_goal: goals.weekly,
            monthly_goal: goals.monthly,
            locale: Locale::default(),
        }
    }
}

impl TrackerConfig {
    /// Goal thresholds as the model type
    pub fn goals(&self) -> Goals {
        Goals {
            daily: self.daily_goal,
            weekly: self.weekly_goal,
            monthly: self.monthly_goal,
        }
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        for (name, goal) in [
            ("daily_goal", self.daily_goal),
            ("weekly_goal", self.weekly_goal),
            ("monthly_goal", self.monthly_goal),
        ] {
            if goal <= Decimal::ZERO {
                return Err(TrackerError::ConfigError(format!(
                    "{} must be greater than 0 (got {})",
                    name, goal
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            TrackerError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            TrackerError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TrackerError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            TrackerError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/faretrack/faretrack.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            TrackerError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.daily_goal, dec!(200));
        assert_eq!(config.weekly_goal, dec!(1000));
        assert_eq!(config.monthly_goal, dec!(4000));
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = TrackerConfig {
            daily_goal: dec!(150),
            weekly_goal: dec!(900),
            monthly_goal: dec!(3600),
            locale: Locale::Pt,
        };
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: TrackerConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: TrackerConfig = toml::from_str("locale = \"pt\"").unwrap();
        assert_eq!(config.locale, Locale::Pt);
        assert_eq!(config.daily_goal, dec!(200));
    }

    #[test]
    fn test_validate_rejects_zero_goal() {
        let config = TrackerConfig {
            daily_goal: Decimal::ZERO,
            ..TrackerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_path() {
        let path = TrackerConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("faretrack"));
        assert!(path.to_string_lossy().contains("faretrack.toml"));
    }
}
