//! Integration tests for configuration loading and saving

use faretrack::config::TrackerConfig;
use faretrack::util::Locale;
use rust_decimal_macros::dec;
use std::fs;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faretrack.toml");

    let config = TrackerConfig::load_from(&path).unwrap();
    assert_eq!(config, TrackerConfig::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("faretrack.toml");

    let config = TrackerConfig {
        daily_goal: dec!(250),
        weekly_goal: dec!(1250),
        monthly_goal: dec!(5000),
        locale: Locale::Pt,
    };
    config.save_to(&path).unwrap();

    let loaded = TrackerConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.goals().daily, dec!(250));
}

#[test]
fn test_invalid_goal_in_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faretrack.toml");
    fs::write(&path, "daily_goal = \"0\"\n").unwrap();

    let result = TrackerConfig::load_from(&path);
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("daily_goal"));
}

#[test]
fn test_malformed_toml_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faretrack.toml");
    fs::write(&path, "locale = [broken\n").unwrap();

    assert!(TrackerConfig::load_from(&path).is_err());
}

#[test]
fn test_save_refuses_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("faretrack.toml");

    let config = TrackerConfig {
        weekly_goal: dec!(-1),
        ..TrackerConfig::default()
    };
    assert!(config.save_to(&path).is_err());
    assert!(!path.exists());
}
