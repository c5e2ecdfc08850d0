/*!
 * Idol language insight.
 *
 * Static corpus statistics: whitespace word frequencies over the sample idol
 * corpus plus two fixed sample tables (adverb usage and speech register).
 */

use std::collections::HashMap;
use std::fmt::Write;

use crate::demo_data::{ADVERB_COUNTS, IDOL_CORPUS, REGISTER_COUNTS};

/// A labelled count with its share of the table total
#[derive(Debug, Clone, PartialEq)]
pub struct CountRow {
    pub label: String,
    pub count: u32,
    pub percent: f64,
}

/// Count whitespace-separated words; ties keep first-appearance order
pub fn word_frequency<S: AsRef<str>>(corpus: &[S], top_n: usize) -> Vec<(String, u32)> {
    let mut counts: HashMap<&str, (u32, usize)> = HashMap::new();
    let mut order = 0usize;

    for line in corpus {
        for word in line.as_ref().split_whitespace() {
            let slot = counts.entry(word).or_insert_with(|| {
                order += 1;
                (0, order)
            });
            slot.0 += 1;
        }
    }

    let mut ranked: Vec<(&str, (u32, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked
        .into_iter()
        .take(top_n)
        .map(|(word, (count, _))| (word.to_string(), count))
        .collect()
}

/// Attach percentage shares to a count table
pub fn with_shares(rows: &[(&str, u32)]) -> Vec<CountRow> {
    let total: u32 = rows.iter().map(|(_, count)| count).sum();
    rows.iter()
        .map(|(label, count)| CountRow {
            label: (*label).to_string(),
            count: *count,
            percent: if total == 0 { 0.0 } else { f64::from(*count) * 100.0 / f64::from(total) },
        })
        .collect()
}

/// Top words of the built-in idol corpus
pub fn top_corpus_words(top_n: usize) -> Vec<(String, u32)> {
    word_frequency(IDOL_CORPUS, top_n)
}

pub fn adverb_usage() -> Vec<CountRow> {
    with_shares(ADVERB_COUNTS)
}

pub fn register_usage() -> Vec<CountRow> {
    with_shares(REGISTER_COUNTS)
}

/// Render rows as a horizontal bar chart scaled to `width` columns
pub fn render_bars(rows: &[(String, u32)], width: usize) -> String {
    let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let mut out = String::new();

    for (label, count) in rows {
        let bar_len = if max == 0 { 0 } else { (*count as usize * width).div_ceil(max as usize) };
        let padding = label_width - label.chars().count();
        let _ = writeln!(out, "{}{} | {} {}", label, " ".repeat(padding), "█".repeat(bar_len), count);
    }

    out
}
