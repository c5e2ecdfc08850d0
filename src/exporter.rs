/*!
 * Subtitle export.
 *
 * Renders a subtitle buffer into the two downloadable text formats:
 * - timed captions (numbered blocks with `HH:MM:SS,mmm --> HH:MM:SS,mmm`)
 * - plain text (`[H:MM:SS] original / translated`, one line per entry)
 *
 * Both are pure functions over the entries; artifacts wrap the rendered text in
 * an in-memory buffer with a suggested file name.
 */

use bytes::Bytes;
use std::fmt::Write;

use crate::subtitle_processor::{SubtitleEntry, format_clock, format_timestamp};

/// MIME type for every export
pub const TEXT_MIME_TYPE: &str = "text/plain";

/// Render entries as timed captions, numbering blocks from 1
pub fn to_timed_captions(entries: &[SubtitleEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n{}\n\n",
            i + 1,
            format_timestamp(entry.start_time_ms),
            format_timestamp(entry.end_time_ms),
            entry.original,
            entry.translated
        );
    }
    out
}

/// Render entries as plain text lines stamped with their start time
pub fn to_plain_text(entries: &[SubtitleEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "[{}] {} / {}",
                format_clock(entry.start_time_ms),
                entry.original,
                entry.translated
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// An export ready to hand to the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: Bytes,
}

impl ExportArtifact {
    pub fn timed_captions(entries: &[SubtitleEntry], file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime_type: TEXT_MIME_TYPE,
            content: Bytes::from(to_timed_captions(entries)),
        }
    }

    pub fn plain_text(entries: &[SubtitleEntry], file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime_type: TEXT_MIME_TYPE,
            content: Bytes::from(to_plain_text(entries)),
        }
    }

    /// Content as text; exports are always valid UTF-8
    pub fn as_text(&self) -> &str {
        std::str::from_utf8(&self.content).unwrap_or_default()
    }
}
