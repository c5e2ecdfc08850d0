/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::time::Duration;

use ianzimu::app_config::{Config, LogLevel};
use ianzimu::errors::ConfigError;
use ianzimu::language_utils::InterfaceLanguage;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.interface_language, InterfaceLanguage::Zh);
    assert_eq!(config.playback.tick_interval_ms, 300);
    assert_eq!(config.playback.tick_interval(), Duration::from_millis(300));
    assert!(config.playback.stop_at_end);
    assert_eq!(config.export.timed_caption_file_name, "ian_subtitles.srt");
    assert_eq!(config.export.plain_text_file_name, "ian_subtitles.txt");
    assert_eq!(config.insight.top_words, 10);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.playback.tick_interval_ms = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    config.playback.tick_interval_ms = 300;

    config.export.plain_text_file_name = "  ".to_string();
    assert_eq!(config.validate(), Err(ConfigError::EmptyFileName("plain text")));
}

#[test]
fn test_config_partialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"interface_language": "ko", "playback": {"tick_interval_ms": 50}}"#)?;

    assert_eq!(config.interface_language, InterfaceLanguage::Ko);
    assert_eq!(config.playback.tick_interval_ms, 50);
    assert!(config.playback.stop_at_end);
    assert_eq!(config.export.timed_caption_file_name, "ian_subtitles.srt");
    Ok(())
}

#[test]
fn test_config_withUnknownLanguage_shouldFailToParse() {
    let parsed: Result<Config, _> = serde_json::from_str(r#"{"interface_language": "fr"}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("ianzimu.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(created, Config::default());

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded, created);
    Ok(())
}

#[test]
fn test_load_or_create_withExistingFile_shouldReadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{"log_level": "debug", "insight": {"top_words": 3}}"#)?;

    let config = Config::load_or_create(&path)?;
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(config.insight.top_words, 3);
    assert_eq!(config.insight.chart_width, 30);
    Ok(())
}

#[test]
fn test_load_or_create_withMalformedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;
    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}
