/*!
 * Study session state.
 *
 * A `StudySession` owns everything that lives for one session: the subtitle
 * timeline, the vocabulary book, the last explanation shown, the last quiz
 * result and the selected interface language. Nothing here is global, so
 * several sessions can coexist.
 */

use log::{debug, info};

use crate::app_config::{Config, ExportConfig};
use crate::demo_data::DEMO_LIVE_URL;
use crate::errors::SubtitleError;
use crate::explanation::{self, ExplanationRecord};
use crate::exporter::ExportArtifact;
use crate::language_utils::{InterfaceLanguage, ui_text};
use crate::lexicon::Lexicon;
use crate::quiz::{self, QuizResult};
use crate::subtitle_processor::{SubtitleEntry, demo_entries};
use crate::timeline::TimelineEngine;
use crate::vocabulary::VocabularyStore;

/// State of a single interactive study session
#[derive(Debug, Clone)]
pub struct StudySession {
    language: InterfaceLanguage,
    export: ExportConfig,
    lexicon: Lexicon,
    timeline: TimelineEngine,
    vocabulary: VocabularyStore,
    last_explanation: Option<ExplanationRecord>,
    quiz_result: Option<QuizResult>,
    loaded: bool,
}

impl StudySession {
    /// Create an empty session using the demo lexicon
    pub fn new(config: &Config) -> Self {
        Self {
            language: config.interface_language,
            export: config.export.clone(),
            lexicon: Lexicon::demo().clone(),
            timeline: TimelineEngine::new(),
            vocabulary: VocabularyStore::new(),
            last_explanation: None,
            quiz_result: None,
            loaded: false,
        }
    }

    /// Load the simulated live stream
    ///
    /// The URL is accepted for the demo affordance only; nothing is fetched.
    pub fn load_demo(&mut self, url: Option<&str>) {
        info!("Demo mode: simulating live stream {}", url.unwrap_or(DEMO_LIVE_URL));
        // The demo table is known to be valid
        let _ = self.load_entries(demo_entries());
        self.loaded = true;
    }

    /// Replace the subtitle buffer with custom entries
    pub fn load_entries(&mut self, entries: Vec<SubtitleEntry>) -> Result<(), SubtitleError> {
        self.timeline.load(entries)?;
        self.loaded = true;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn timeline(&self) -> &TimelineEngine {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut TimelineEngine {
        &mut self.timeline
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Explain a word and remember it as the last explanation
    pub fn explain(&mut self, word: &str) -> &ExplanationRecord {
        let record = explanation::explain(word, &self.lexicon);
        self.last_explanation.insert(record)
    }

    pub fn last_explanation(&self) -> Option<&ExplanationRecord> {
        self.last_explanation.as_ref()
    }

    /// Explain a word and save it to the vocabulary book
    pub fn save_word(&mut self, word: &str) -> ExplanationRecord {
        let record = explanation::explain(word, &self.lexicon);
        self.vocabulary.add(word, record.clone());
        record
    }

    /// Remove a word from the vocabulary book; returns whether it was present
    pub fn remove_word(&mut self, word: &str) -> bool {
        self.vocabulary.remove(word).is_some()
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }

    /// Score answers against the built-in bank and keep the result
    pub fn submit_quiz<S: AsRef<str>>(&mut self, answers: &[S]) -> QuizResult {
        let result = quiz::score(quiz::question_bank(), answers);
        debug!("Quiz scored {}/{} ({:?})", result.score, result.total, result.band);
        self.quiz_result = Some(result);
        result
    }

    pub fn quiz_result(&self) -> Option<&QuizResult> {
        self.quiz_result.as_ref()
    }

    pub fn reset_quiz(&mut self) {
        self.quiz_result = None;
    }

    pub fn export_timed_captions(&self) -> ExportArtifact {
        ExportArtifact::timed_captions(self.timeline.entries(), &self.export.timed_caption_file_name)
    }

    pub fn export_plain_text(&self) -> ExportArtifact {
        ExportArtifact::plain_text(self.timeline.entries(), &self.export.plain_text_file_name)
    }

    pub fn language(&self) -> InterfaceLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: InterfaceLanguage) {
        self.language = language;
    }

    /// Interface text for the session language
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        ui_text(self.language, key)
    }
}
