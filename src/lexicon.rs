/*!
 * TOPIK lexicon.
 *
 * A read-only table of surface words with their lemma, proficiency level and a
 * short note. Lookups are exact matches on the surface token; no stemming or
 * particle stripping takes place.
 */

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::demo_data::LEXICON_ENTRIES;

/// TOPIK proficiency level of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Topik1,
    Topik2,
    Topik3,
    Topik4,
    Topik5,
    Topik6,
    /// Word not tagged in the lexicon
    Unknown,
}

impl ProficiencyLevel {
    /// Map a TOPIK grade (1-6) to a level
    pub fn from_grade(grade: u8) -> Self {
        match grade {
            1 => Self::Topik1,
            2 => Self::Topik2,
            3 => Self::Topik3,
            4 => Self::Topik4,
            5 => Self::Topik5,
            6 => Self::Topik6,
            _ => Self::Unknown,
        }
    }

    /// TOPIK grade, if known
    pub fn grade(&self) -> Option<u8> {
        match self {
            Self::Topik1 => Some(1),
            Self::Topik2 => Some(2),
            Self::Topik3 => Some(3),
            Self::Topik4 => Some(4),
            Self::Topik5 => Some(5),
            Self::Topik6 => Some(6),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.grade() {
            Some(grade) => write!(f, "TOPIK {}", grade),
            None => write!(f, "unknown"),
        }
    }
}

/// A single lexicon entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub surface: String,
    pub lemma: String,
    pub level: ProficiencyLevel,
    pub note: String,
}

/// Word lookup table keyed by surface form
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

// @const: Demo lexicon, built on first use
static DEMO_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::from_entries(LEXICON_ENTRIES.iter().map(|(surface, lemma, grade, note)| LexiconEntry {
        surface: (*surface).to_string(),
        lemma: (*lemma).to_string(),
        level: ProficiencyLevel::from_grade(*grade),
        note: (*note).to_string(),
    }))
});

impl Lexicon {
    /// Build a lexicon; later entries with the same surface form win
    pub fn from_entries<I: IntoIterator<Item = LexiconEntry>>(entries: I) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.surface.clone(), entry))
            .collect();
        Self { entries }
    }

    /// The built-in demo lexicon
    pub fn demo() -> &'static Lexicon {
        &DEMO_LEXICON
    }

    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
