/*!
 * Tests for subtitle entries, timestamps and timed-caption parsing
 */

use anyhow::Result;
use ianzimu::errors::SubtitleError;
use ianzimu::subtitle_processor::{
    RawSubtitleEntry, SubtitleEntry, demo_entries, entries_from_raw, format_clock, format_short, format_timestamp,
    load_entries_from_json, parse_timed_captions,
};
use ianzimu::exporter::to_timed_captions;

use crate::common;

#[test]
fn test_parse_timestamp_withValidFormat_shouldReturnMilliseconds() -> Result<()> {
    assert_eq!(SubtitleEntry::parse_timestamp("00:00:00,000")?, 0);
    assert_eq!(SubtitleEntry::parse_timestamp("00:00:04,000")?, 4000);
    assert_eq!(SubtitleEntry::parse_timestamp("01:02:03,456")?, 3_723_456);
    Ok(())
}

#[test]
fn test_parse_timestamp_withInvalidFormat_shouldFail() {
    assert!(SubtitleEntry::parse_timestamp("00:00:04").is_err());
    assert!(SubtitleEntry::parse_timestamp("00:61:00,000").is_err());
    assert!(SubtitleEntry::parse_timestamp("aa:00:00,000").is_err());
}

#[test]
fn test_format_functions_withSameInput_shouldUseTheirOwnLayouts() {
    assert_eq!(format_timestamp(3_723_456), "01:02:03,456");
    assert_eq!(format_clock(3_723_456), "1:02:03");
    assert_eq!(format_short(12_999), "00:12");
    assert_eq!(format_short(75_000), "01:15");
}

#[test]
fn test_new_validated_withNegativeStart_shouldReturnNegativeTime() {
    let err = SubtitleEntry::new_validated(3, -10, 100, "a", "b").unwrap_err();
    assert_eq!(err, SubtitleError::NegativeTime { seq_num: 3, time_ms: -10 });
}

#[test]
fn test_new_validated_withEndNotAfterStart_shouldReturnInvalidRange() {
    let err = SubtitleEntry::new_validated(1, 500, 500, "a", "b").unwrap_err();
    assert_eq!(err, SubtitleError::InvalidTimeRange { seq_num: 1, start_ms: 500, end_ms: 500 });
}

#[test]
fn test_is_active_at_withBoundaries_shouldIncludeBothEnds() {
    let entry = SubtitleEntry::new(1, 4000, 7500, "a", "b");
    assert!(!entry.is_active_at(3999));
    assert!(entry.is_active_at(4000));
    assert!(entry.is_active_at(7500));
    assert!(!entry.is_active_at(7501));
}

#[test]
fn test_demo_entries_withBuiltInTable_shouldBeNumberedAndOrdered() {
    let entries = demo_entries();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries.iter().map(|e| e.seq_num).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert!(entries.windows(2).all(|w| w[0].end_time_ms < w[1].start_time_ms));
    assert_eq!(entries[4].end_time_ms, 19_500);
}

#[test]
fn test_entries_from_raw_withOneBadEntry_shouldRejectAll() {
    let raw = vec![
        RawSubtitleEntry { start: 0, end: 1000, orig: "a".into(), trans: "b".into() },
        RawSubtitleEntry { start: 2000, end: 1500, orig: "c".into(), trans: "d".into() },
    ];
    let err = entries_from_raw(&raw).unwrap_err();
    assert!(matches!(err, SubtitleError::InvalidTimeRange { seq_num: 2, .. }));
}

#[test]
fn test_load_entries_from_json_withValidFile_shouldLoadEntries() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitles_json(temp_dir.path(), "subs.json")?;

    let entries = load_entries_from_json(&path)?;
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].original, "발음 좋아요.");
    assert_eq!(entries[1].start_time_ms, 2500);
    Ok(())
}

#[test]
fn test_load_entries_from_json_withMalformedJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "bad.json", "[{\"start\": 0}")?;
    assert!(load_entries_from_json(&path).is_err());
    Ok(())
}

#[test]
fn test_parse_timed_captions_withMultilineTranslation_shouldJoinTranslation() -> Result<()> {
    let content = "7\n00:00:01,000 --> 00:00:02,500\n원문\n첫 줄\n둘째 줄\n";
    let entries = parse_timed_captions(content)?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].seq_num, 7);
    assert_eq!(entries[0].start_time_ms, 1000);
    assert_eq!(entries[0].end_time_ms, 2500);
    assert_eq!(entries[0].original, "원문");
    assert_eq!(entries[0].translated, "첫 줄\n둘째 줄");
    Ok(())
}

#[test]
fn test_parse_timed_captions_withBrokenTimestamp_shouldReportLine() {
    let content = "1\n00:00:01 --> 00:00:02\ntext\n";
    let err = parse_timed_captions(content).unwrap_err();
    assert!(matches!(err, SubtitleError::Parse { line: 2, .. }));
}

#[test]
fn test_parse_timed_captions_withMissingSequenceNumber_shouldFail() {
    let err = parse_timed_captions("hello\n").unwrap_err();
    assert!(matches!(err, SubtitleError::Parse { line: 1, .. }));
}

#[test]
fn test_parse_timed_captions_withEmptyAndPaddedText_shouldKeepTextVerbatim() -> Result<()> {
    let entries = vec![
        SubtitleEntry::new(1, 0, 1000, "", "译文"),
        SubtitleEntry::new(2, 1500, 2500, "  안녕 ", "  pad "),
    ];

    let reparsed = parse_timed_captions(&to_timed_captions(&entries))?;

    assert_eq!(reparsed, entries);
    Ok(())
}

#[test]
fn test_parse_timed_captions_withCrlfLineEndings_shouldMatchLf() -> Result<()> {
    let content = "1\r\n00:00:01,000 --> 00:00:02,000\r\n가사\r\n歌词\r\n\r\n";
    let entries = parse_timed_captions(content)?;

    assert_eq!(entries, vec![SubtitleEntry::new(1, 1000, 2000, "가사", "歌词")]);
    Ok(())
}

#[test]
fn test_parse_timed_captions_withOverflowingHours_shouldFailWithoutPanic() {
    let content = "1\n9999999999999999:00:00,000 --> 9999999999999999:00:01,000\na\nb\n";
    let err = parse_timed_captions(content).unwrap_err();
    assert!(matches!(err, SubtitleError::Parse { line: 2, .. }));
}

#[test]
fn test_parse_timed_captions_withHoursBeyondU64_shouldFailInsteadOfZero() {
    let content = "1\n99999999999999999999:00:00,000 --> 99999999999999999999:00:01,000\na\nb\n";
    let err = parse_timed_captions(content).unwrap_err();
    assert!(matches!(err, SubtitleError::Parse { line: 2, .. }));
}

#[test]
fn test_parse_timestamp_withOverflowingHours_shouldFail() {
    assert!(SubtitleEntry::parse_timestamp("9999999999999999:00:00,000").is_err());
    assert!(SubtitleEntry::parse_timestamp("99999999999999999999:00:00,000").is_err());
}

#[test]
fn test_display_withEntry_shouldRenderCaptionBlock() {
    let entry = SubtitleEntry::new(2, 4000, 7500, "가사", "歌词");
    assert_eq!(entry.to_string(), "2\n00:00:04,000 --> 00:00:07,500\n가사\n歌词\n\n");
}
