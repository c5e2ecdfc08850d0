use std::fmt;
use std::fs;
use std::path::Path;
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use log::{debug, warn};

use crate::demo_data::DEMO_SUBTITLES;
use crate::errors::SubtitleError;

// @module: Bilingual subtitle entries, timestamps and timed-caption parsing

// @const: Timed-caption timestamp line regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}:\d{2}:\d{2},\d{3}) --> (\d{2,}:\d{2}:\d{2},\d{3})$").unwrap()
});

// @struct: Single bilingual subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Original (Korean) text
    pub original: String,

    // @field: Translated text
    pub translated: String,
}

/// Subtitle entry as it appears in a JSON subtitle file
///
/// Times are signed so that negative values surface as validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSubtitleEntry {
    pub start: i64,
    pub end: i64,
    pub orig: String,
    pub trans: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry without validation
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, original: &str, translated: &str) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            original: original.to_string(),
            translated: translated.to_string(),
        }
    }

    // @creates: Validated subtitle entry
    // @validates: Non-negative times and end > start
    pub fn new_validated(seq_num: usize, start_ms: i64, end_ms: i64, original: &str, translated: &str) -> Result<Self, SubtitleError> {
        for time_ms in [start_ms, end_ms] {
            if time_ms < 0 {
                return Err(SubtitleError::NegativeTime { seq_num, time_ms });
            }
        }

        if end_ms <= start_ms {
            return Err(SubtitleError::InvalidTimeRange { seq_num, start_ms, end_ms });
        }

        Ok(Self::new(seq_num, start_ms as u64, end_ms as u64, original, translated))
    }

    /// Check the time invariants of an already-built entry
    pub fn validate(&self) -> Result<(), SubtitleError> {
        if self.end_time_ms <= self.start_time_ms {
            return Err(SubtitleError::InvalidTimeRange {
                seq_num: self.seq_num,
                start_ms: self.start_time_ms as i64,
                end_ms: self.end_time_ms as i64,
            });
        }
        Ok(())
    }

    /// Whether the entry is showing at the given position (both ends inclusive)
    pub fn is_active_at(&self, position_ms: u64) -> bool {
        self.start_time_ms <= position_ms && position_ms <= self.end_time_ms
    }

    /// Parse a timed-caption timestamp (HH:MM:SS,mmm) to milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        let parts: Vec<&str> = timestamp.split(&[':', ','][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow::anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow::anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        hours
            .checked_mul(3_600_000)
            .and_then(|ms| ms.checked_add(minutes * 60_000 + seconds * 1_000 + millis))
            .ok_or_else(|| anyhow::anyhow!("Timestamp out of range: {}", timestamp))
    }

    /// Convert start time to formatted timestamp
    pub fn format_start_time(&self) -> String {
        format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted timestamp
    pub fn format_end_time(&self) -> String {
        format_timestamp(self.end_time_ms)
    }
}

/// Format milliseconds as a timed-caption timestamp (HH:MM:SS,mmm)
pub fn format_timestamp(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Format milliseconds as a duration clock (H:MM:SS), dropping milliseconds
pub fn format_clock(ms: u64) -> String {
    let total_seconds = ms / 1_000;
    format!(
        "{}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

/// Format milliseconds as MM:SS for on-screen captions
pub fn format_short(ms: u64) -> String {
    let s = ms / 1_000;
    format!("{:02}:{:02}", s / 60, s % 60)
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.original)?;
        writeln!(f, "{}", self.translated)?;
        writeln!(f)
    }
}

/// The built-in simulated live stream, numbered from 1
pub fn demo_entries() -> Vec<SubtitleEntry> {
    DEMO_SUBTITLES
        .iter()
        .enumerate()
        .map(|(i, (start, end, original, translated))| SubtitleEntry::new(i + 1, *start, *end, original, translated))
        .collect()
}

/// Validate raw entries, numbering them in file order
pub fn entries_from_raw(raw: &[RawSubtitleEntry]) -> Result<Vec<SubtitleEntry>, SubtitleError> {
    raw.iter()
        .enumerate()
        .map(|(i, r)| SubtitleEntry::new_validated(i + 1, r.start, r.end, &r.orig, &r.trans))
        .collect()
}

/// Load and validate a JSON array of subtitle entries
pub fn load_entries_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<SubtitleEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;
    let raw: Vec<RawSubtitleEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse subtitle file: {}", path.display()))?;

    debug!("Read {} raw subtitle entries from {}", raw.len(), path.display());

    Ok(entries_from_raw(&raw)?)
}

/// Where the parser is inside a caption block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    SeqNum,
    Timestamp,
    Original,
    Translated,
    Continuation,
}

/// Parse timed-caption content back into bilingual entries
///
/// The two lines after the timestamp are the original and the translation, taken
/// verbatim even when blank. Further non-blank lines extend the translation.
/// Sequence numbers are kept as written.
pub fn parse_timed_captions(content: &str) -> Result<Vec<SubtitleEntry>, SubtitleError> {
    let mut entries = Vec::new();

    let mut state = BlockState::SeqNum;
    let mut seq_num = 0usize;
    let mut times = (0i64, 0i64);
    let mut original = String::new();
    let mut translated = String::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        match state {
            BlockState::SeqNum => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                seq_num = trimmed.parse::<usize>().map_err(|_| SubtitleError::Parse {
                    line: line_number,
                    message: format!("expected a sequence number, found '{}'", trimmed),
                })?;
                state = BlockState::Timestamp;
            }
            BlockState::Timestamp => {
                times = parse_timestamp_line(line.trim(), line_number)?;
                state = BlockState::Original;
            }
            BlockState::Original => {
                original = line.to_string();
                state = BlockState::Translated;
            }
            BlockState::Translated => {
                translated = line.to_string();
                state = BlockState::Continuation;
            }
            BlockState::Continuation if line.trim().is_empty() => {
                entries.push(finish_block(seq_num, times, &mut original, &mut translated)?);
                state = BlockState::SeqNum;
            }
            BlockState::Continuation => {
                translated.push('\n');
                translated.push_str(line);
            }
        }
    }

    // Content may end without the trailing blank line
    match state {
        BlockState::SeqNum => {}
        BlockState::Timestamp => warn!("Dangling sequence number {} without timestamps", seq_num),
        _ => entries.push(finish_block(seq_num, times, &mut original, &mut translated)?),
    }

    debug!("Parsed {} caption blocks", entries.len());
    Ok(entries)
}

fn finish_block(seq_num: usize, (start, end): (i64, i64), original: &mut String, translated: &mut String) -> Result<SubtitleEntry, SubtitleError> {
    let entry = SubtitleEntry::new_validated(seq_num, start, end, original, translated)?;
    original.clear();
    translated.clear();
    Ok(entry)
}

// Times come back signed to feed `new_validated`; anything past i64::MAX is rejected here
fn parse_timestamp_line(line: &str, line_number: usize) -> Result<(i64, i64), SubtitleError> {
    let caps = TIMESTAMP_REGEX.captures(line).ok_or_else(|| SubtitleError::Parse {
        line: line_number,
        message: format!("expected a timestamp line, found '{}'", line),
    })?;

    let parse = |idx: usize| -> Result<i64, SubtitleError> {
        SubtitleEntry::parse_timestamp(&caps[idx])
            .and_then(|ms| i64::try_from(ms).map_err(|_| anyhow::anyhow!("Timestamp out of range: {}", &caps[idx])))
            .map_err(|e| SubtitleError::Parse {
                line: line_number,
                message: e.to_string(),
            })
    };

    Ok((parse(1)?, parse(2)?))
}
