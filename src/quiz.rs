/*!
 * TOPIK self-assessment quiz.
 *
 * A fixed bank of multiple-choice questions and a scorer that maps the number
 * of correct answers to a proficiency band. The band thresholds are data, not
 * derived from the bank size.
 */

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::demo_data::QUIZ_BANK;
use crate::language_utils::{InterfaceLanguage, ui_text};

/// One labelled answer option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub label: char,
    pub text: String,
}

impl QuizOption {
    /// Option as displayed, e.g. `B. 发音`
    pub fn display(&self) -> String {
        format!("{}. {}", self.label, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<QuizOption>,
    /// Label of the correct option
    pub answer: char,
}

/// Estimated proficiency band, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProficiencyBand {
    Beginner,
    EarlyIntermediate,
    UpperIntermediate,
}

impl ProficiencyBand {
    fn text_key(&self) -> &'static str {
        match self {
            Self::Beginner => "band_beginner",
            Self::EarlyIntermediate => "band_early",
            Self::UpperIntermediate => "band_upper",
        }
    }

    /// Localised band label
    pub fn label(&self, language: InterfaceLanguage) -> &'static str {
        ui_text(language, self.text_key())
    }
}

/// Minimum score for each band, highest band first
pub const BAND_THRESHOLDS: [(u32, ProficiencyBand); 3] = [
    (4, ProficiencyBand::UpperIntermediate),
    (2, ProficiencyBand::EarlyIntermediate),
    (0, ProficiencyBand::Beginner),
];

/// Outcome of one quiz attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub band: ProficiencyBand,
}

// @const: Built-in question bank
static QUESTION_BANK: Lazy<Vec<QuizQuestion>> = Lazy::new(|| {
    QUIZ_BANK
        .iter()
        .map(|(prompt, options, answer)| QuizQuestion {
            prompt: (*prompt).to_string(),
            options: options
                .iter()
                .map(|(label, text)| QuizOption { label: *label, text: (*text).to_string() })
                .collect(),
            answer: *answer,
        })
        .collect()
});

/// The built-in five-question bank
pub fn question_bank() -> &'static [QuizQuestion] {
    &QUESTION_BANK
}

/// Band for a given score
pub fn band_for_score(score: u32) -> ProficiencyBand {
    BAND_THRESHOLDS
        .iter()
        .find(|(min_score, _)| score >= *min_score)
        .map_or(ProficiencyBand::Beginner, |(_, band)| *band)
}

/// Label of an answer: its first non-blank character, upper-cased
///
/// Accepts both bare labels (`B`) and full option texts (`B. 发音`).
pub fn answer_label(answer: &str) -> Option<char> {
    answer.trim().chars().next().map(|c| c.to_ascii_uppercase())
}

/// Score answers given in question order; missing answers count as wrong
pub fn score<S: AsRef<str>>(questions: &[QuizQuestion], answers: &[S]) -> QuizResult {
    let score = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| answer_label(answer.as_ref()) == Some(question.answer))
        .count() as u32;

    QuizResult {
        score,
        total: questions.len() as u32,
        band: band_for_score(score),
    }
}
