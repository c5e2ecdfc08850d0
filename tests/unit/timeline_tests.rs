/*!
 * Tests for the subtitle timeline engine
 */

use ianzimu::subtitle_processor::{SubtitleEntry, demo_entries};
use ianzimu::timeline::{PlaybackState, TICK_STEP_MS, TimelineEngine};

use crate::common;

fn demo_engine() -> TimelineEngine {
    let mut engine = TimelineEngine::new();
    engine.load(demo_entries()).expect("demo entries are valid");
    engine
}

#[test]
fn test_tick_withDemoStream_shouldBeMonotonicAndBounded() {
    let mut engine = demo_engine();
    engine.start();

    let max = engine.max_position();
    let mut previous = engine.position();
    for _ in 0..40 {
        engine.tick();
        assert!(engine.position() >= previous);
        assert!(engine.position() <= max);
        previous = engine.position();
    }

    assert_eq!(engine.position(), 19_500);
    assert!(engine.at_end());
    assert_eq!(engine.state(), PlaybackState::Playing);
}

#[test]
fn test_tick_withFreshEngine_shouldAdvanceByFixedStep() {
    let mut engine = demo_engine();
    engine.start();
    assert!(engine.tick());
    assert_eq!(engine.position(), TICK_STEP_MS);
    assert!(engine.tick());
    assert_eq!(engine.position(), 3000);
}

#[test]
fn test_seek_withAnyTarget_shouldLandInsideTimeline() {
    let mut engine = demo_engine();
    for target in [0, 1, 9_000, 19_500, 19_501, u64::MAX] {
        engine.seek(target);
        assert!(engine.position() <= engine.max_position());
    }
    engine.seek(u64::MAX);
    assert_eq!(engine.position(), 19_500);
}

#[test]
fn test_queries_beforeFirstEntry_shouldReturnFirstAsUpcoming() {
    let mut engine = TimelineEngine::new();
    engine.load(common::sample_entries()).expect("sample entries are valid");

    assert!(engine.active_entries(500).is_empty());
    assert_eq!(engine.next_upcoming(500).map(|e| e.seq_num), Some(1));
}

#[test]
fn test_queries_inGap_shouldReturnNextEntry() {
    let engine = demo_engine();
    assert!(engine.active_entries(3_750).is_empty());
    assert_eq!(engine.next_upcoming(3_750).map(|e| e.seq_num), Some(2));
}

#[test]
fn test_queries_afterLastEnd_shouldHaveNoUpcoming() {
    let engine = demo_engine();
    assert!(engine.active_entries(25_000).is_empty());
    assert!(engine.next_upcoming(25_000).is_none());
    assert!(engine.next_upcoming(16_000).is_none());
}

#[test]
fn test_empty_engine_shouldHaveZeroMaxAndNoEntries() {
    let mut engine = TimelineEngine::new();
    assert_eq!(engine.max_position(), 0);
    engine.seek(5_000);
    assert_eq!(engine.position(), 0);
    assert!(engine.active_at_current().is_empty());
    assert!(engine.upcoming_at_current().is_none());
    assert!(engine.is_empty());
}

#[test]
fn test_seek_withLongEntryOverlappingShortOne_shouldReachLongestEnd() {
    let mut engine = TimelineEngine::new();
    engine
        .load(vec![
            SubtitleEntry::new(1, 0, 10_000, "긴 자막", "长字幕"),
            SubtitleEntry::new(2, 1_000, 2_000, "짧은 자막", "短字幕"),
        ])
        .expect("overlapping entries are valid");

    assert_eq!(engine.max_position(), 10_000);
    engine.seek(u64::MAX);
    assert_eq!(engine.position(), 10_000);
    assert_eq!(engine.active_at_current().len(), 1);
    assert!(engine.at_end());
}

#[test]
fn test_stop_withPlayingEngine_shouldFreezePosition() {
    let mut engine = demo_engine();
    engine.start();
    engine.tick();
    engine.stop();
    assert!(!engine.tick());
    assert_eq!(engine.position(), TICK_STEP_MS);
    assert!(!engine.is_playing());
}
