/*!
 * # Ianzimu - live K-pop subtitles for Korean study
 *
 * A Rust library and terminal demo that plays a simulated live stream with
 * bilingual (Korean / Chinese) subtitles and turns it into study material.
 *
 * ## Features
 *
 * - Simulated live subtitle timeline with a fixed 1.5 s tick
 * - Highlighting of study words found in a small Korean lexicon
 * - Word explanations in Chinese, Korean and English
 * - Vocabulary book with a review queue
 * - Subtitle export as timed captions (SRT) or a plain-text transcript
 * - Five-question proficiency quiz
 * - Idol language insight charts over a sample corpus
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Subtitle entries, timestamps and caption parsing
 * - `lexicon`: Study words and their proficiency levels
 * - `tokenizer`: Hangul word tokenization and highlighting
 * - `explanation`: Templated word explanations
 * - `timeline`: Position, tick and active-entry queries
 * - `playback`: Async tick driver with stop requests
 * - `vocabulary`: Saved words
 * - `exporter`: Timed-caption and plain-text rendering
 * - `quiz`: Question bank and scoring
 * - `insight`: Corpus statistics and text charts
 * - `session`: Per-session state
 * - `app_controller`: Main application controller
 * - `language_utils`: Interface languages and strings
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod demo_data;
pub mod errors;
pub mod explanation;
pub mod exporter;
pub mod file_utils;
pub mod insight;
pub mod language_utils;
pub mod lexicon;
pub mod playback;
pub mod quiz;
pub mod session;
pub mod subtitle_processor;
pub mod timeline;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{ConfigError, SubtitleError};
pub use explanation::{ExplanationRecord, explain};
pub use exporter::ExportArtifact;
pub use language_utils::InterfaceLanguage;
pub use lexicon::{Lexicon, ProficiencyLevel};
pub use playback::{PlaybackDriver, PlaybackOutcome, TickControl};
pub use quiz::{ProficiencyBand, QuizResult};
pub use session::StudySession;
pub use subtitle_processor::SubtitleEntry;
pub use timeline::{PlaybackState, TimelineEngine};
pub use vocabulary::VocabularyStore;
