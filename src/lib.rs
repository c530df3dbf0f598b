//! Faretrack - rideshare driver finance tracker
//!
//! A TUI application for logging per-trip earnings, gas expenses and
//! mileage, and watching progress toward daily/weekly/monthly earnings
//! goals. All tracking state is session-scoped and lives in memory.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum TrackerError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::IoError(err) => write!(f, "I/O error: {}", err),
            TrackerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TrackerError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::IoError(err)
    }
}

impl From<toml::de::Error> for TrackerError {
    fn from(err: toml::de::Error) -> Self {
        TrackerError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for TrackerError {
    fn from(err: toml::ser::Error) -> Self {
        TrackerError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for faretrack operations
pub type Result<T> = std::result::Result<T, TrackerError>;

// Common constants
pub const APP_NAME: &str = "faretrack";
pub const CONFIG_FILE: &str = "faretrack.toml";
/// Number of trips shown in the recent-trips panel, newest first
pub const RECENT_TRIPS_SHOWN: usize = 5;
