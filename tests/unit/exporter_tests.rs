/*!
 * Tests for timed-caption and plain-text export
 */

use anyhow::Result;
use ianzimu::exporter::{ExportArtifact, TEXT_MIME_TYPE, to_plain_text, to_timed_captions};
use ianzimu::subtitle_processor::{demo_entries, parse_timed_captions};

#[test]
fn test_timed_captions_withDemoEntries_shouldKeepEveryTextInOrder() {
    let entries = demo_entries();
    let output = to_timed_captions(&entries);

    let mut cursor = 0;
    for entry in &entries {
        let found = output[cursor..].find(&entry.original).expect("original text present");
        cursor += found + entry.original.len();
        let found = output[cursor..].find(&entry.translated).expect("translated text present");
        cursor += found + entry.translated.len();
    }

    assert!(output.starts_with("1\n00:00:00,000 --> 00:00:03,500\n"));
    assert!(output.ends_with("\n\n"));
}

#[test]
fn test_timed_captions_withDemoEntries_shouldReparseIntoFiveBlocks() -> Result<()> {
    let entries = demo_entries();
    let reparsed = parse_timed_captions(&to_timed_captions(&entries))?;

    assert_eq!(reparsed.len(), 5);
    assert_eq!(reparsed.iter().map(|e| e.seq_num).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(reparsed, entries);
    Ok(())
}

#[test]
fn test_timed_captions_withUnnumberedInput_shouldNumberFromOne() {
    let mut entries = demo_entries();
    entries.drain(..3);
    let output = to_timed_captions(&entries);
    assert!(output.starts_with("1\n00:00:12,000 --> 00:00:15,500\n"));
    assert!(output.contains("\n\n2\n00:00:16,000 --> 00:00:19,500\n"));
}

#[test]
fn test_plain_text_withDemoEntries_shouldStampStartTimes() {
    let output = to_plain_text(&demo_entries());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "[0:00:00] 안녕하세요 여러분, 오늘은 신곡 리허설이 있어요. / 大家好，今天有新歌排练。");
    assert!(lines[2].starts_with("[0:00:08] "));
    assert!(!output.ends_with('\n'));
}

#[test]
fn test_artifacts_withDemoEntries_shouldCarryNameMimeAndContent() {
    let entries = demo_entries();

    let srt = ExportArtifact::timed_captions(&entries, "ian_subtitles.srt");
    assert_eq!(srt.file_name, "ian_subtitles.srt");
    assert_eq!(srt.mime_type, TEXT_MIME_TYPE);
    assert_eq!(srt.as_text(), to_timed_captions(&entries));

    let txt = ExportArtifact::plain_text(&entries, "ian_subtitles.txt");
    assert_eq!(txt.mime_type, "text/plain");
    assert_eq!(txt.content.len(), to_plain_text(&entries).len());
}
