/*!
 * Error types for the ianzimu application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions. Lookup misses, empty
 * subtitle buffers and out-of-range seeks are not errors and never show up here.
 */

use thiserror::Error;

/// Errors that can occur while loading or parsing subtitles
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// An entry whose end time is not after its start time
    #[error("Invalid time range for entry {seq_num}: end time {end_ms} <= start time {start_ms}")]
    InvalidTimeRange {
        /// Sequence number of the offending entry
        seq_num: usize,
        /// Start time in milliseconds
        start_ms: i64,
        /// End time in milliseconds
        end_ms: i64,
    },

    /// An entry with a start or end time before zero
    #[error("Negative time in entry {seq_num}: {time_ms} ms")]
    NegativeTime {
        /// Sequence number of the offending entry
        seq_num: usize,
        /// The negative value
        time_ms: i64,
    },

    /// Timed-caption content that could not be parsed
    #[error("Failed to parse timed captions at line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
}

/// Errors raised while validating the configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unsupported interface language code
    #[error("Unsupported interface language: {0} (expected one of zh, ko, en)")]
    UnsupportedLanguage(String),

    /// Tick pacing must be a positive duration
    #[error("Playback tick interval must be greater than zero")]
    ZeroTickInterval,

    /// Export file names must not be empty
    #[error("Export file name for {0} must not be empty")]
    EmptyFileName(&'static str),
}
