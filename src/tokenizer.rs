/*!
 * Subtitle line tokenizer.
 *
 * Splits a line into word runs and single-character separators. Whitespace is a
 * token of its own, so joining the token texts gives back the exact input.
 */

use std::collections::BTreeSet;

use crate::lexicon::Lexicon;

/// Kind of token produced by [`tokenize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of alphanumeric or Hangul syllable characters
    Word,
    /// Any other single character, whitespace included
    Other,
}

/// A slice of the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

/// A token marked as present in the lexicon or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedToken {
    pub token: Token,
    pub highlighted: bool,
}

// Hangul syllables block, U+AC00..=U+D7A3
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ('\u{AC00}'..='\u{D7A3}').contains(&ch)
}

/// Split a line into tokens
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in line.chars() {
        if is_word_char(ch) {
            word.push(ch);
            continue;
        }
        if !word.is_empty() {
            tokens.push(Token {
                text: std::mem::take(&mut word),
                kind: TokenKind::Word,
            });
        }
        tokens.push(Token {
            text: ch.to_string(),
            kind: TokenKind::Other,
        });
    }

    if !word.is_empty() {
        tokens.push(Token {
            text: word,
            kind: TokenKind::Word,
        });
    }

    tokens
}

/// Tokenize a line and mark the words found in the lexicon
pub fn highlight(line: &str, lexicon: &Lexicon) -> Vec<HighlightedToken> {
    tokenize(line)
        .into_iter()
        .map(|token| {
            let highlighted = token.kind == TokenKind::Word && lexicon.contains(&token.text);
            HighlightedToken { token, highlighted }
        })
        .collect()
}

/// Distinct lexicon words of a line, sorted
pub fn lexicon_words(line: &str, lexicon: &Lexicon) -> Vec<String> {
    highlight(line, lexicon)
        .into_iter()
        .filter(|t| t.highlighted)
        .map(|t| t.token.text)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
