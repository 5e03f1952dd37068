use std::path::Path;

use serde::Serialize;

use crate::ai_signals::{self, AiLikelihood};
use crate::bias::{self, BiasReport};
use crate::config::Config;
use crate::error::ConfigResult;
use crate::hyperparameters::HP;
use crate::lexical::LexicalProfile;
use crate::readability::{ReadabilityInputs, ReadabilityProfile};
use crate::standards::{self, ScoreReport};
use crate::tokenize::TokenCounts;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    pub counts: TokenCounts,
    pub lexical: LexicalProfile,
    pub readability: ReadabilityProfile,
    pub reading_time_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub metrics: TextMetrics,
    pub quality: ScoreReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricChange {
    pub metric: &'static str,
    pub before: f64,
    pub after: f64,
    pub difference: f64,
    /// Relative change in percent; 0 when `before` is 0.
    pub percent_change: f64,
}

impl MetricChange {
    fn new(metric: &'static str, before: f64, after: f64) -> Self {
        let difference = after - before;
        let percent_change = if before == 0.0 {
            0.0
        } else {
            difference / before * 100.0
        };
        Self {
            metric,
            before,
            after,
            difference,
            percent_change,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextComparison {
    pub before: TextMetrics,
    pub after: TextMetrics,
    pub differences: Vec<MetricChange>,
}

impl TextComparison {
    pub fn change(&self, metric: &str) -> Option<&MetricChange> {
        self.differences.iter().find(|c| c.metric == metric)
    }
}

type MetricAccessor = fn(&TextMetrics) -> f64;

/// Metrics reported by [`Engine::compare_texts`], in output order.
const COMPARED_METRICS: &[(&str, MetricAccessor)] = &[
    ("word_count", |m| m.counts.word_count as f64),
    ("sentence_count", |m| m.counts.sentence_count as f64),
    ("paragraph_count", |m| m.counts.paragraph_count as f64),
    ("vocabulary_diversity", |m| m.lexical.vocabulary_diversity),
    ("avg_sentence_length", |m| m.lexical.avg_sentence_length),
    ("flesch_reading_ease", |m| m.readability.flesch_reading_ease),
    ("flesch_kincaid_grade", |m| m.readability.flesch_kincaid_grade),
];

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Builds an engine from a TOML config file.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        Ok(Self {
            config: Config::load(path)?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> TextMetrics {
        let counts = TokenCounts::from_text(text);
        let lexical = LexicalProfile::new(
            text,
            &counts,
            &self.config.lexicons.stop_words,
            self.config.top_words,
        );
        let readability = ReadabilityInputs::from_text(text).profile();
        tracing::debug!(
            words = counts.word_count,
            sentences = counts.sentence_count,
            "text measured"
        );

        TextMetrics {
            counts,
            lexical,
            readability,
            reading_time_minutes: counts.word_count as f64 / HP.reading_words_per_minute,
        }
    }

    pub fn detect_bias(&self, text: &str) -> BiasReport {
        bias::detect(text, &self.config.lexicons)
    }

    pub fn score_ai_likelihood(&self, text: &str) -> AiLikelihood {
        ai_signals::score(text, &self.config.lexicons)
    }

    /// Unknown genres are scored as essays; see [`ScoreReport::genre_fallback`].
    pub fn compare_to_standard(&self, metrics: &TextMetrics, genre: &str) -> ScoreReport {
        standards::compare(
            &metrics.counts,
            &metrics.lexical,
            genre,
            &self.config.benchmarks,
        )
    }

    pub fn evaluate(&self, text: &str, genre: &str) -> TextAnalysis {
        let metrics = self.analyze(text);
        let quality = self.compare_to_standard(&metrics, genre);
        TextAnalysis { metrics, quality }
    }

    #[tracing::instrument(skip_all)]
    pub fn compare_texts(&self, before: &str, after: &str) -> TextComparison {
        let before = self.analyze(before);
        let after = self.analyze(after);
        let differences = COMPARED_METRICS
            .iter()
            .map(|&(metric, value)| MetricChange::new(metric, value(&before), value(&after)))
            .collect();

        TextComparison {
            before,
            after,
            differences,
        }
    }
}
