/*!
 * Simulated word explanations.
 *
 * Turns a lexicon lookup into a display-ready record with one explanation per
 * interface language. Words missing from the lexicon get a fallback record
 * tagged `unknown`, so explaining a word never fails.
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::language_utils::InterfaceLanguage;
use crate::lexicon::{Lexicon, ProficiencyLevel};

/// Display-ready explanation of a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRecord {
    pub word: String,
    pub lemma: String,
    pub level: ProficiencyLevel,
    pub explanations: BTreeMap<InterfaceLanguage, String>,
    /// Example grammar pattern
    pub grammar: String,
}

impl ExplanationRecord {
    /// Explanation text for a language, falling back to the Chinese text
    pub fn explanation_for(&self, language: InterfaceLanguage) -> &str {
        self.explanations
            .get(&language)
            .or_else(|| self.explanations.get(&InterfaceLanguage::Zh))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Whether the word was found in the lexicon
    pub fn is_known(&self) -> bool {
        self.level != ProficiencyLevel::Unknown
    }
}

/// Explain a word using the given lexicon
pub fn explain(word: &str, lexicon: &Lexicon) -> ExplanationRecord {
    match lexicon.lookup(word) {
        Some(entry) => {
            let note = &entry.note;
            let explanations = BTreeMap::from([
                (InterfaceLanguage::Zh, format!("（模拟）{} 的中文解释：{}", word, note)),
                (InterfaceLanguage::Ko, format!("(시뮬레이션) {}의 설명: {}", word, note)),
                (InterfaceLanguage::En, format!("(simulated) {}: {}", word, note)),
            ]);
            ExplanationRecord {
                word: word.to_string(),
                lemma: entry.lemma.clone(),
                level: entry.level,
                explanations,
                grammar: format!("示例：{} + (으)면 ...", entry.lemma),
            }
        }
        None => {
            let explanations = BTreeMap::from([
                (InterfaceLanguage::Zh, format!("（模拟）{}：暂无详细信息，建议标注为复习单词。", word)),
                (InterfaceLanguage::Ko, format!("(시뮬레이션) {}: 정보 없음.", word)),
                (InterfaceLanguage::En, format!("(simulated) {}: no information yet, flagged for review.", word)),
            ]);
            ExplanationRecord {
                word: word.to_string(),
                lemma: word.to_string(),
                level: ProficiencyLevel::Unknown,
                explanations,
                grammar: "暂无".to_string(),
            }
        }
    }
}
