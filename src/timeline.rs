/*!
 * Subtitle timeline engine.
 *
 * Holds the loaded subtitle buffer and the simulated playback position. The
 * engine is a two-state machine (Stopped / Playing); only `tick` moves the
 * position on its own, by a fixed step, and it saturates at the end of the
 * last entry without leaving the Playing state.
 */

use log::{debug, info, warn};

use crate::errors::SubtitleError;
use crate::subtitle_processor::SubtitleEntry;

/// Position advance per tick, in milliseconds
pub const TICK_STEP_MS: u64 = 1500;

/// Playback state of the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// Subtitle buffer plus playback position
#[derive(Debug, Clone, Default)]
pub struct TimelineEngine {
    entries: Vec<SubtitleEntry>,
    position_ms: u64,
    state: PlaybackState,
}

impl TimelineEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the subtitle buffer, rewind and stop
    ///
    /// Every entry is validated first; on failure the current buffer, position
    /// and state are left untouched.
    pub fn load(&mut self, mut entries: Vec<SubtitleEntry>) -> Result<(), SubtitleError> {
        for entry in &entries {
            entry.validate()?;
        }

        if entries.windows(2).any(|pair| pair[0].start_time_ms > pair[1].start_time_ms) {
            warn!("Subtitle entries were not ordered by start time, sorting them");
        }
        // Stable: entries sharing a start time keep their sequence order
        entries.sort_by_key(|entry| entry.start_time_ms);

        info!("Loaded {} subtitle entries", entries.len());
        self.entries = entries;
        self.position_ms = 0;
        self.state = PlaybackState::Stopped;
        Ok(())
    }

    /// Move to a position, clamped to the timeline bounds
    pub fn seek(&mut self, position_ms: u64) {
        self.position_ms = position_ms.min(self.max_position());
    }

    /// Start playing; ignored when the buffer is empty or already playing
    pub fn start(&mut self) {
        if self.state == PlaybackState::Playing {
            return;
        }
        if self.entries.is_empty() {
            debug!("Ignoring start request on an empty subtitle buffer");
            return;
        }
        self.state = PlaybackState::Playing;
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    /// Advance the position by one tick while playing
    ///
    /// Returns whether the position moved. At the end of the timeline the
    /// engine stays in the Playing state.
    pub fn tick(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let previous = self.position_ms;
        self.position_ms = previous.saturating_add(TICK_STEP_MS).min(self.max_position());
        self.position_ms != previous
    }

    /// Every entry showing at the given position, in start order
    pub fn active_entries(&self, position_ms: u64) -> Vec<&SubtitleEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_active_at(position_ms))
            .collect()
    }

    /// First entry starting strictly after the given position
    pub fn next_upcoming(&self, position_ms: u64) -> Option<&SubtitleEntry> {
        self.entries
            .iter()
            .find(|entry| entry.start_time_ms > position_ms)
    }

    pub fn active_at_current(&self) -> Vec<&SubtitleEntry> {
        self.active_entries(self.position_ms)
    }

    pub fn upcoming_at_current(&self) -> Option<&SubtitleEntry> {
        self.next_upcoming(self.position_ms)
    }

    /// Latest end time across all entries, or 0 for an empty buffer
    pub fn max_position(&self) -> u64 {
        self.entries.iter().map(|entry| entry.end_time_ms).max().unwrap_or(0)
    }

    pub fn at_end(&self) -> bool {
        self.position_ms >= self.max_position()
    }

    pub fn position(&self) -> u64 {
        self.position_ms
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn entries(&self) -> &[SubtitleEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
