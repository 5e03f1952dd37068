use std::collections::HashMap;

use serde::Serialize;

use crate::hyperparameters::HP;
use crate::lexicon::WordSet;
use crate::tokenize::{self, TokenCounts};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalProfile {
    pub vocabulary_diversity: f64,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub most_common_words: Vec<WordFrequency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

impl LexicalProfile {
    pub fn new(text: &str, counts: &TokenCounts, stop_words: &WordSet, top_n: usize) -> Self {
        Self {
            vocabulary_diversity: ratio(counts.unique_word_count, counts.word_count).min(1.0),
            avg_word_length: ratio(counts.character_count_no_spaces, counts.word_count),
            avg_sentence_length: ratio(counts.word_count, counts.sentence_count),
            most_common_words: most_common_words(text, stop_words, top_n),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Content words ranked by frequency. Ties keep first-appearance order.
pub fn most_common_words(text: &str, stop_words: &WordSet, top_n: usize) -> Vec<WordFrequency> {
    let mut order: Vec<WordFrequency> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokenize::tokens(text) {
        let word = tokenize::normalize_token(token);
        if word.chars().count() < HP.min_content_word_chars || stop_words.contains(&word) {
            continue;
        }
        match index.get(&word) {
            Some(&i) => order[i].count += 1,
            None => {
                index.insert(word.clone(), order.len());
                order.push(WordFrequency { word, count: 1 });
            }
        }
    }

    // Stable sort, so equal counts stay in first-seen order.
    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(top_n);
    order
}
