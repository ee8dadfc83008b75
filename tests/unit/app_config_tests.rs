/*!
 * Tests for configuration loading, saving and validation
 */

use anyhow::Result;
use subfix::app_config::{Config, LogLevel, SplitMode};
use subfix::fixes::FixRule;
use crate::common;

/// Test that the default configuration is valid
#[test]
fn test_default_config_shouldBeValid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.language, "auto");
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.import.split_mode, SplitMode::Line);
}

/// Test that only the English-only rule is off by default
#[test]
fn test_default_rules_shouldAllBeEnabledExceptAloneI() {
    let config = Config::default();
    let disabled: Vec<FixRule> = FixRule::ALL
        .into_iter()
        .filter(|rule| !config.fixes.is_enabled(*rule))
        .collect();
    assert_eq!(disabled, vec![FixRule::AloneLowercaseIToUppercaseIEnglish]);
}

/// Test that a saved config loads back unchanged
#[test]
fn test_save_and_from_file_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.language = "da".to_string();
    config.fixes.set_enabled(FixRule::BreakLongLines, false);
    config.fixes.max_line_length = 38;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.language, "da");
    assert!(!loaded.fixes.is_enabled(FixRule::BreakLongLines));
    assert_eq!(loaded.fixes.max_line_length, 38);
    Ok(())
}

/// Test that a malformed config file reports a parse error
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let error = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to parse config file"));
    Ok(())
}

/// Test that validation rejects inconsistent values
#[test]
fn test_validate_withInvalidValues_shouldFail() {
    let mut config = Config::default();
    config.language = "qq".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.fixes.min_display_ms = 9000;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ssa.color = "white".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.import.fixed_duration_ms = Some(0);
    assert!(config.validate().is_err());
}

/// Test that the reading speed follows the configured thresholds
#[test]
fn test_reading_speed_shouldUseConfiguredBounds() {
    use subfix::text_utils::DurationEstimator;

    let mut config = Config::default();
    config.fixes.min_display_ms = 1500;
    let speed = config.fixes.reading_speed();
    assert_eq!(speed.display_milliseconds("Hi"), 1500);
    assert_eq!(speed.display_milliseconds(&"x".repeat(1000)), 8000);
}
