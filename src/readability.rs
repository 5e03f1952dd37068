use serde::Serialize;

use crate::hyperparameters::HP;
use crate::syllables;
use crate::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingLevel {
    Elementary,
    MiddleSchool,
    HighSchool,
    College,
    Graduate,
    Unknown,
}

impl ReadingLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Elementary => "Elementary",
            Self::MiddleSchool => "Middle School",
            Self::HighSchool => "High School",
            Self::College => "College",
            Self::Graduate => "Graduate",
            Self::Unknown => "Unknown",
        }
    }
}

/// Inclusive grade ranges, checked in order. The gaps between bands
/// (e.g. 5.5) are intentional and map to [`ReadingLevel::Unknown`].
const READING_LEVELS: &[(ReadingLevel, f64, f64)] = &[
    (ReadingLevel::Elementary, 0.0, 5.0),
    (ReadingLevel::MiddleSchool, 6.0, 8.0),
    (ReadingLevel::HighSchool, 9.0, 12.0),
    (ReadingLevel::College, 13.0, 16.0),
    (ReadingLevel::Graduate, 17.0, f64::INFINITY),
];

pub fn reading_level(grade: f64) -> ReadingLevel {
    READING_LEVELS
        .iter()
        .find(|(_, min, max)| *min <= grade && grade <= *max)
        .map(|(level, _, _)| *level)
        .unwrap_or(ReadingLevel::Unknown)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadabilityProfile {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub reading_level: ReadingLevel,
}

/// Inputs of both Flesch formulas.
///
/// `syllables` is summed over every whitespace token while `words` only
/// counts tokens with an alphanumeric character, so a text full of bare
/// punctuation reads as slightly harder than it is. Existing scores
/// depend on this, so the two counts stay as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadabilityInputs {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

impl ReadabilityInputs {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: tokenize::words(text).count(),
            sentences: tokenize::sentences(text).len(),
            syllables: syllables::total_syllables(tokenize::tokens(text)),
        }
    }

    fn ratios(&self) -> Option<(f64, f64)> {
        if self.words == 0 || self.sentences == 0 {
            return None;
        }
        let words = self.words as f64;
        Some((words / self.sentences as f64, self.syllables as f64 / words))
    }

    pub fn flesch_reading_ease(&self) -> f64 {
        match self.ratios() {
            Some((words_per_sentence, syllables_per_word)) => (HP.fre_base
                - HP.fre_sentence_weight * words_per_sentence
                - HP.fre_syllable_weight * syllables_per_word)
                .clamp(0.0, 100.0),
            None => 0.0,
        }
    }

    pub fn flesch_kincaid_grade(&self) -> f64 {
        match self.ratios() {
            Some((words_per_sentence, syllables_per_word)) => (HP.fkg_sentence_weight
                * words_per_sentence
                + HP.fkg_syllable_weight * syllables_per_word
                - HP.fkg_offset)
                .max(0.0),
            None => 0.0,
        }
    }

    pub fn profile(&self) -> ReadabilityProfile {
        let grade = self.flesch_kincaid_grade();
        ReadabilityProfile {
            flesch_reading_ease: self.flesch_reading_ease(),
            flesch_kincaid_grade: grade,
            reading_level: reading_level(grade),
        }
    }
}
