/*!
 * Session vocabulary book.
 *
 * Saved words and their explanations, kept in memory for the lifetime of the
 * session. Keys are unique: saving a word again replaces its record.
 */

use log::debug;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, VecDeque};

use crate::explanation::ExplanationRecord;

/// Word → explanation store
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    words: BTreeMap<String, ExplanationRecord>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, replacing any previous record for it
    pub fn add(&mut self, word: &str, record: ExplanationRecord) {
        if self.words.insert(word.to_string(), record).is_some() {
            debug!("Replaced vocabulary entry for '{}'", word);
        } else {
            debug!("Added vocabulary entry for '{}'", word);
        }
    }

    /// Remove a word; missing words are ignored
    pub fn remove(&mut self, word: &str) -> Option<ExplanationRecord> {
        self.words.remove(word)
    }

    /// Saved words in a stable order; the iterator can be cloned and replayed
    pub fn list(&self) -> impl Iterator<Item = (&str, &ExplanationRecord)> + Clone + '_ {
        self.words.iter().map(|(word, record)| (word.as_str(), record))
    }

    pub fn get(&self, word: &str) -> Option<&ExplanationRecord> {
        self.words.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Queue of saved words for the simple review mode
    pub fn review_queue(&self, shuffle: bool) -> VecDeque<String> {
        let mut words: Vec<String> = self.words.keys().cloned().collect();
        if shuffle {
            words.shuffle(&mut rand::rng());
        }
        words.into()
    }
}
