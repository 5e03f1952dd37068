//! Entries may carry a parenthetical note, e.g. `"articulate (in racial
//! context)"`. Only the text before the first `(` is searched for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Built-in term lists
// ---------------------------------------------------------------------------

pub(crate) const GENDER_MALE: &[&str] = &[
    "mankind",
    "manpower",
    "chairman",
    "policeman",
    "fireman",
    "businessman",
    "spokesman",
    "workman",
    "salesman",
    "mailman",
    "he/him (generic)",
    "guys (generic)",
];

pub(crate) const GENDER_FEMALE: &[&str] = &[
    "emotional",
    "bossy",
    "feisty",
    "high-maintenance",
    "shrill",
    "hysterical",
    "hormonal",
    "sassy",
];

pub(crate) const GENDER_STEREOTYPICAL: &[&str] = &[
    "lady doctor",
    "male nurse",
    "female engineer",
    "working mother",
    "career woman",
];

pub(crate) const RACIAL: &[&str] = &[
    "exotic",
    "articulate (in racial context)",
    "urban",
    "inner-city",
    "ethnic-sounding name",
    "well-spoken (in racial context)",
    "minority",
    "diverse (as euphemism)",
    "ghetto",
    "thug",
];

pub(crate) const AGE: &[&str] = &[
    "young blood",
    "old-timer",
    "overqualified",
    "digital native",
    "senior moment",
    "past their prime",
    "fresh perspective",
    "too experienced",
    "not enough experience",
];

pub(crate) const POLITICAL_LEFT: &[&str] = &[
    "fascist",
    "nazi",
    "right-wing extremist",
    "conservative bias",
];

pub(crate) const POLITICAL_RIGHT: &[&str] = &[
    "communist",
    "socialist",
    "left-wing radical",
    "liberal bias",
];

pub(crate) const POLITICAL_POLARIZING: &[&str] =
    &["fake news", "brainwashed", "sheep", "woke", "snowflake"];

pub(crate) const ABILITY: &[&str] = &[
    "handicapped",
    "crippled",
    "suffers from",
    "victim of",
    "confined to wheelchair",
    "special needs",
    "differently abled",
    "mentally challenged",
    "crazy",
    "insane",
    "lame",
    "dumb",
    "blind to",
    "deaf to",
];

pub(crate) const SOCIOECONOMIC: &[&str] = &[
    "poor",
    "disadvantaged",
    "underprivileged",
    "low-class",
    "trailer trash",
    "white trash",
    "welfare queen",
    "born with silver spoon",
];

pub(crate) const AI_PHRASES: &[&str] = &[
    "As an AI language model",
    "I apologize, but",
    "It's important to note that",
    "It is worth noting that",
    "In conclusion",
    "Furthermore",
    "Moreover",
    "Nevertheless",
    "Therefore",
    "However",
    "Additionally",
    "Subsequently",
    "Consequently",
    "In order to",
    "Due to the fact that",
    "In the event that",
    "For the purpose of",
    "With regard to",
    "In terms of",
    "It should be noted that",
    "One must consider",
    "It is essential to",
    "It is crucial to",
];

pub(crate) const AI_SYMBOLS: &[&str] = &[
    "※", "★", "☆", "●", "○", "■", "□", "▪", "▫", "✓", "✔", "✕", "✖", "✗", "✘", "➤", "➔", "➜",
    "➡", "⇒", "⟹", "【", "】", "『", "』", "「", "」",
];

pub(crate) const FORMAL_WORDS: &[&str] = &[
    "utilize",
    "endeavor",
    "facilitate",
    "implement",
    "ascertain",
    "commence",
    "terminate",
    "obtain",
    "purchase",
    "provide",
    "assist",
    "require",
    "sufficient",
    "numerous",
    "prior to",
    "subsequent to",
    "concerning",
    "regarding",
    "aforementioned",
    "heretofore",
    "in lieu of",
];

pub(crate) const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is",
    "was", "are", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "when",
    "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "such", "than", "too", "very",
];

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// The entry as written, annotation included.
    pub term: String,
    /// Lower-cased search text with the annotation removed.
    pub needle: String,
}

impl LexiconEntry {
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let needle = term
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        Self { term, needle }
    }

    pub fn is_match(&self, text_lower: &str) -> bool {
        text_lower.contains(&self.needle)
    }
}

/// An ordered term list, prepared for substring matching.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn builtin(terms: &[&str]) -> Self {
        terms.iter().copied().map(String::from).collect::<Vec<_>>().into()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose needle occurs in `text_lower`, in list order.
    pub fn matches<'a>(&'a self, text_lower: &'a str) -> impl Iterator<Item = &'a LexiconEntry> {
        self.entries.iter().filter(move |e| e.is_match(text_lower))
    }

    /// First entry with an empty needle, if any. A blank needle would
    /// match every text.
    pub(crate) fn blank_entry(&self) -> Option<&LexiconEntry> {
        self.entries.iter().find(|e| e.needle.is_empty())
    }
}

impl From<Vec<String>> for Lexicon {
    fn from(terms: Vec<String>) -> Self {
        Self {
            entries: terms.into_iter().map(LexiconEntry::new).collect(),
        }
    }
}

impl From<Lexicon> for Vec<String> {
    fn from(lexicon: Lexicon) -> Self {
        lexicon.entries.into_iter().map(|e| e.term).collect()
    }
}

/// Case-insensitive word set used for stop-word filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn builtin(words: &[&str]) -> Self {
        words.iter().copied().map(String::from).collect::<Vec<_>>().into()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for WordSet {
    fn from(words: Vec<String>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

impl From<WordSet> for Vec<String> {
    fn from(set: WordSet) -> Self {
        let mut words: Vec<String> = set.words.into_iter().collect();
        words.sort();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_is_stripped_from_needle() {
        let entry = LexiconEntry::new("Articulate (in racial context)");
        assert_eq!(entry.term, "Articulate (in racial context)");
        assert_eq!(entry.needle, "articulate");
    }

    #[test]
    fn matching_is_plain_substring() {
        let lexicon = Lexicon::builtin(RACIAL);
        let hits: Vec<&str> = lexicon
            .matches("the suburban office")
            .map(|e| e.term.as_str())
            .collect();
        assert_eq!(hits, vec!["urban"]);
    }

    #[test]
    fn builtin_list_sizes() {
        assert_eq!(AI_PHRASES.len(), 23);
        assert_eq!(AI_SYMBOLS.len(), 27);
        assert_eq!(FORMAL_WORDS.len(), 21);
        assert_eq!(WordSet::builtin(STOP_WORDS).len(), STOP_WORDS.len());
    }

    #[test]
    fn blank_needle_is_reported() {
        let lexicon = Lexicon::from(vec!["ok".to_string(), " (note only)".to_string()]);
        assert_eq!(
            lexicon.blank_entry().map(|e| e.term.as_str()),
            Some(" (note only)")
        );
    }
}
