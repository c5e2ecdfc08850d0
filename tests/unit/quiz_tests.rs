/*!
 * Tests for quiz scoring
 */

use ianzimu::language_utils::InterfaceLanguage;
use ianzimu::quiz::{ProficiencyBand, answer_label, question_bank, score};

#[test]
fn test_score_withAllCorrectAnswers_shouldReachHighestBand() {
    let result = score(question_bank(), &["B", "C", "C", "B", "B"]);
    assert_eq!(result.score, 5);
    assert_eq!(result.total, 5);
    assert_eq!(result.band, ProficiencyBand::UpperIntermediate);
}

#[test]
fn test_score_withAllWrongAnswers_shouldBeLowestBand() {
    let result = score(question_bank(), &["A", "A", "A", "A", "A"]);
    assert_eq!(result.score, 0);
    assert_eq!(result.band, ProficiencyBand::Beginner);
}

#[test]
fn test_score_withOneCorrectAnswer_shouldBeLowestBand() {
    let result = score(question_bank(), &["B", "A", "A", "A", "A"]);
    assert_eq!(result.score, 1);
    assert_eq!(result.band, ProficiencyBand::Beginner);
}

#[test]
fn test_score_withTwoCorrectAnswers_shouldBeMiddleBand() {
    let result = score(question_bank(), &["B", "C", "A", "A", "A"]);
    assert_eq!(result.score, 2);
    assert_eq!(result.band, ProficiencyBand::EarlyIntermediate);
}

#[test]
fn test_score_withFullOptionTexts_shouldCompareLabels() {
    let answers = ["B. 发音", "c", " C. 歌词有很多难懂的表达。", "B", "b"];
    assert_eq!(score(question_bank(), &answers).score, 5);
}

#[test]
fn test_score_withMissingAnswers_shouldCountThemWrong() {
    let result = score(question_bank(), &["B", "C"]);
    assert_eq!(result.score, 2);
    assert_eq!(result.total, 5);

    let empty: [&str; 0] = [];
    assert_eq!(score(question_bank(), &empty).score, 0);
}

#[test]
fn test_answer_label_withBlankInput_shouldBeNone() {
    assert_eq!(answer_label("   "), None);
    assert_eq!(answer_label("d"), Some('D'));
}

#[test]
fn test_question_bank_shouldHaveFourLabelledOptionsPerQuestion() {
    let bank = question_bank();
    assert_eq!(bank.len(), 5);
    for question in bank {
        let labels: Vec<char> = question.options.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!['A', 'B', 'C', 'D']);
        assert!(labels.contains(&question.answer));
    }
}

#[test]
fn test_band_label_withEachLanguage_shouldBeTranslated() {
    for language in InterfaceLanguage::ALL {
        let label = ProficiencyBand::UpperIntermediate.label(language);
        assert!(!label.is_empty());
        assert_ne!(label, "band_upper");
    }
}
