//! Rule-based prose metrics.

pub mod ai_signals;
pub mod bias;
pub mod config;
pub mod engine;
pub mod error;
mod hyperparameters;
pub mod lexical;
pub mod lexicon;
pub mod readability;
pub mod standards;
pub mod syllables;
pub mod tokenize;

use once_cell::sync::Lazy;

pub use ai_signals::{AiAssessment, AiLikelihood};
pub use bias::{BiasReport, CategoryReport, Issue, Severity};
pub use config::{Config, Lexicons};
pub use engine::{Engine, MetricChange, TextAnalysis, TextComparison, TextMetrics};
pub use error::{ConfigError, ConfigResult};
pub use lexical::{LexicalProfile, WordFrequency};
pub use readability::{ReadabilityProfile, ReadingLevel};
pub use standards::{Genre, QualityAssessment, ScoreReport};
pub use tokenize::TokenCounts;

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

pub fn analyze(text: &str) -> TextMetrics {
    DEFAULT_ENGINE.analyze(text)
}

pub fn detect_bias(text: &str) -> BiasReport {
    DEFAULT_ENGINE.detect_bias(text)
}

pub fn score_ai_likelihood(text: &str) -> AiLikelihood {
    DEFAULT_ENGINE.score_ai_likelihood(text)
}

pub fn compare_to_standard(metrics: &TextMetrics, genre: &str) -> ScoreReport {
    DEFAULT_ENGINE.compare_to_standard(metrics, genre)
}

/// [`analyze`] followed by [`compare_to_standard`].
pub fn evaluate(text: &str, genre: &str) -> TextAnalysis {
    DEFAULT_ENGINE.evaluate(text, genre)
}

/// Before/after metrics for two versions of a text.
pub fn compare_texts(before: &str, after: &str) -> TextComparison {
    DEFAULT_ENGINE.compare_texts(before, after)
}
