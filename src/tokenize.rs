use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static BLANK_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Raw counts derived once per document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenCounts {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub unique_word_count: usize,
}

impl TokenCounts {
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: words(text).count(),
            sentence_count: sentences(text).len(),
            paragraph_count: paragraphs(text).len(),
            character_count: text.chars().count(),
            character_count_no_spaces: text.chars().filter(|c| *c != ' ').count(),
            unique_word_count: unique_words(text).len(),
        }
    }
}

/// Whitespace-delimited tokens, punctuation included. The ASCII
/// separators U+001C..=U+001F also split.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|t| !t.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Tokens that carry at least one alphanumeric character.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    tokens(text).filter(|t| is_word(t))
}

pub fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Sentence fragments, trimmed, with blank fragments dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Number of fragments produced by splitting on sentence terminators,
/// blank ones included. Always at least 1.
pub fn raw_sentence_fragment_count(text: &str) -> usize {
    SENTENCE_END_RE.find_iter(text).count() + 1
}

pub fn paragraphs(text: &str) -> Vec<&str> {
    BLANK_LINE_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Lower-cases a token and keeps only alphanumerics and `_`. Anything
/// [`is_word`] accepts therefore normalizes to a non-empty string.
pub fn normalize_token(token: &str) -> String {
    token.to_lowercase().chars().filter(|&c| is_word_char(c)).collect()
}

/// Distinct normalized words. Only tokens that count as words contribute,
/// which keeps the set no larger than the word count.
pub fn unique_words(text: &str) -> HashSet<String> {
    words(text)
        .map(normalize_token)
        .filter(|w| !w.is_empty())
        .collect()
}
