use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::language_utils::InterfaceLanguage;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Interface language (zh, ko, en)
    #[serde(default)]
    pub interface_language: InterfaceLanguage,

    /// Playback simulation settings
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Subtitle export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Corpus insight settings
    #[serde(default)]
    pub insight: InsightConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Playback simulation configuration
///
/// Only the wall-clock pacing is configurable; the position always advances by
/// the fixed tick step of the timeline engine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Wall-clock delay between ticks in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop `play` once the end of the timeline is reached
    #[serde(default = "default_true")]
    pub stop_at_end: bool,
}

impl PlaybackConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            stop_at_end: true,
        }
    }
}

/// Export configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    /// Suggested file name for the timed-caption export
    #[serde(default = "default_timed_caption_file_name")]
    pub timed_caption_file_name: String,

    /// Suggested file name for the plain-text export
    #[serde(default = "default_plain_text_file_name")]
    pub plain_text_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            timed_caption_file_name: default_timed_caption_file_name(),
            plain_text_file_name: default_plain_text_file_name(),
        }
    }
}

/// Insight page configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InsightConfig {
    /// Number of words in the frequency table
    #[serde(default = "default_top_words")]
    pub top_words: usize,

    /// Width of the text bar charts
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            top_words: default_top_words(),
            chart_width: default_chart_width(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    300
}

fn default_timed_caption_file_name() -> String {
    "ian_subtitles.srt".to_string()
}

fn default_plain_text_file_name() -> String {
    "ian_subtitles.txt".to_string()
}

fn default_top_words() -> usize {
    10
}

fn default_chart_width() -> usize {
    30
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playback.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if self.export.timed_caption_file_name.trim().is_empty() {
            return Err(ConfigError::EmptyFileName("timed captions"));
        }

        if self.export.plain_text_file_name.trim().is_empty() {
            return Err(ConfigError::EmptyFileName("plain text"));
        }

        Ok(())
    }

    /// Load the configuration, writing a default file when none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;

            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            interface_language: InterfaceLanguage::default(),
            playback: PlaybackConfig::default(),
            export: ExportConfig::default(),
            insight: InsightConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
