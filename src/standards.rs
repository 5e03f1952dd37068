use serde::{Deserialize, Serialize};

use crate::hyperparameters::HP;
use crate::lexical::LexicalProfile;
use crate::tokenize::TokenCounts;

// ---------------------------------------------------------------------------
// Genres and benchmarks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    #[default]
    Essay,
    CoverLetter,
    Resume,
    Letter,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Essay, Genre::CoverLetter, Genre::Resume, Genre::Letter];

    pub fn key(self) -> &'static str {
        match self {
            Self::Essay => "essay",
            Self::CoverLetter => "cover_letter",
            Self::Resume => "resume",
            Self::Letter => "letter",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == key)
    }

    /// Maps a genre key to a genre, falling back to [`Genre::Essay`] for
    /// anything unrecognized. The fallback is reported, never silent.
    pub fn resolve(key: &str) -> ResolvedGenre {
        match Self::from_key(key) {
            Some(genre) => ResolvedGenre {
                genre,
                fell_back: false,
            },
            None => {
                tracing::warn!(requested = key, "unknown genre, using essay benchmarks");
                ResolvedGenre {
                    genre: Self::default(),
                    fell_back: true,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedGenre {
    pub genre: Genre,
    pub fell_back: bool,
}

/// Target ranges for one genre. Ranges are inclusive `(low, high)` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkProfile {
    pub min_words: usize,
    pub ideal_words: (usize, usize),
    pub max_words: usize,
    pub ideal_sentence_length: (f64, f64),
    pub min_vocabulary_diversity: f64,
    pub ideal_paragraphs: (usize, usize),
}

impl BenchmarkProfile {
    fn validate(&self) -> Result<(), String> {
        let (ideal_lo, ideal_hi) = self.ideal_words;
        if !(self.min_words <= ideal_lo && ideal_lo <= ideal_hi && ideal_hi <= self.max_words) {
            return Err("word targets must satisfy min <= ideal low <= ideal high <= max".into());
        }
        let (sent_lo, sent_hi) = self.ideal_sentence_length;
        if !(sent_lo.is_finite() && sent_hi.is_finite() && 0.0 <= sent_lo && sent_lo <= sent_hi) {
            return Err("ideal_sentence_length must be an ordered, non-negative range".into());
        }
        if !(0.0..=1.0).contains(&self.min_vocabulary_diversity) {
            return Err("min_vocabulary_diversity must be within 0..=1".into());
        }
        if self.ideal_paragraphs.0 > self.ideal_paragraphs.1 {
            return Err("ideal_paragraphs must be an ordered range".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Benchmarks {
    pub essay: BenchmarkProfile,
    pub cover_letter: BenchmarkProfile,
    pub resume: BenchmarkProfile,
    pub letter: BenchmarkProfile,
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self {
            essay: BenchmarkProfile {
                min_words: 300,
                ideal_words: (500, 1500),
                max_words: 3000,
                ideal_sentence_length: (15.0, 20.0),
                min_vocabulary_diversity: 0.5,
                ideal_paragraphs: (3, 10),
            },
            cover_letter: BenchmarkProfile {
                min_words: 200,
                ideal_words: (250, 400),
                max_words: 500,
                ideal_sentence_length: (12.0, 18.0),
                min_vocabulary_diversity: 0.55,
                ideal_paragraphs: (3, 5),
            },
            resume: BenchmarkProfile {
                min_words: 200,
                ideal_words: (300, 600),
                max_words: 800,
                ideal_sentence_length: (10.0, 15.0),
                min_vocabulary_diversity: 0.6,
                ideal_paragraphs: (4, 8),
            },
            letter: BenchmarkProfile {
                min_words: 150,
                ideal_words: (200, 500),
                max_words: 750,
                ideal_sentence_length: (12.0, 20.0),
                min_vocabulary_diversity: 0.5,
                ideal_paragraphs: (3, 6),
            },
        }
    }
}

impl Benchmarks {
    pub fn get(&self, genre: Genre) -> &BenchmarkProfile {
        match genre {
            Genre::Essay => &self.essay,
            Genre::CoverLetter => &self.cover_letter,
            Genre::Resume => &self.resume,
            Genre::Letter => &self.letter,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        for genre in Genre::ALL {
            self.get(genre)
                .validate()
                .map_err(|e| format!("benchmark `{}`: {e}", genre.key()))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityAssessment {
    Excellent,
    Good,
    Acceptable,
    NeedsWork,
}

impl QualityAssessment {
    pub fn from_score(score: i32) -> Self {
        if score >= HP.band_excellent_min {
            Self::Excellent
        } else if score >= HP.band_good_min {
            Self::Good
        } else if score >= HP.band_acceptable_min {
            Self::Acceptable
        } else {
            Self::NeedsWork
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - Meets high-quality standards",
            Self::Good => "Good - Minor improvements recommended",
            Self::Acceptable => "Acceptable - Several areas for improvement",
            Self::NeedsWork => "Needs work - Significant improvements needed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub score: i32,
    pub assessment: QualityAssessment,
    pub feedback: Vec<String>,
    pub strengths: Vec<String>,
    pub genre: Genre,
    /// True when the requested genre was unknown and essay was used.
    pub genre_fallback: bool,
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

struct RuleContext<'a> {
    words: usize,
    avg_sentence_length: f64,
    vocabulary_diversity: f64,
    paragraphs: usize,
    benchmark: &'a BenchmarkProfile,
}

enum Effect {
    Penalty { points: i32, feedback: String },
    Strength(String),
}

struct Branch {
    when: fn(&RuleContext) -> bool,
    then: fn(&RuleContext) -> Effect,
}

struct MetricRule {
    metric: &'static str,
    branches: &'static [Branch],
}

// First branch whose predicate holds wins; later branches are skipped.
static RULES: &[MetricRule] = &[
    MetricRule {
        metric: "word_count",
        branches: &[
            Branch {
                when: words_below_min,
                then: too_short,
            },
            Branch {
                when: words_above_max,
                then: too_long,
            },
            Branch {
                when: words_ideal,
                then: ideal_word_count,
            },
            Branch {
                when: always,
                then: acceptable_word_count,
            },
        ],
    },
    MetricRule {
        metric: "sentence_length",
        branches: &[
            Branch {
                when: sentences_choppy,
                then: choppy_sentences,
            },
            Branch {
                when: sentences_overlong,
                then: overlong_sentences,
            },
            Branch {
                when: sentences_ideal,
                then: ideal_sentences,
            },
        ],
    },
    MetricRule {
        metric: "vocabulary_diversity",
        branches: &[
            Branch {
                when: diversity_low,
                then: low_diversity,
            },
            Branch {
                when: diversity_met,
                then: rich_vocabulary,
            },
        ],
    },
    MetricRule {
        metric: "paragraph_count",
        branches: &[
            Branch {
                when: paragraphs_too_few,
                then: too_few_paragraphs,
            },
            Branch {
                when: paragraphs_too_many,
                then: too_many_paragraphs,
            },
            Branch {
                when: paragraphs_ideal,
                then: ideal_paragraphs,
            },
        ],
    },
];

fn always(_: &RuleContext) -> bool {
    true
}

fn words_below_min(ctx: &RuleContext) -> bool {
    ctx.words < ctx.benchmark.min_words
}

fn words_above_max(ctx: &RuleContext) -> bool {
    ctx.words > ctx.benchmark.max_words
}

fn words_ideal(ctx: &RuleContext) -> bool {
    let (lo, hi) = ctx.benchmark.ideal_words;
    (lo..=hi).contains(&ctx.words)
}

fn too_short(ctx: &RuleContext) -> Effect {
    Effect::Penalty {
        points: HP.too_short_penalty,
        feedback: format!(
            "Text is too short ({} words). Minimum recommended: {} words",
            ctx.words, ctx.benchmark.min_words
        ),
    }
}

fn too_long(ctx: &RuleContext) -> Effect {
    Effect::Penalty {
        points: HP.too_long_penalty,
        feedback: format!(
            "Text is too long ({} words). Maximum recommended: {} words",
            ctx.words, ctx.benchmark.max_words
        ),
    }
}

fn ideal_word_count(ctx: &RuleContext) -> Effect {
    Effect::Strength(format!("Excellent word count ({} words)", ctx.words))
}

fn acceptable_word_count(ctx: &RuleContext) -> Effect {
    let (lo, hi) = ctx.benchmark.ideal_words;
    Effect::Penalty {
        points: HP.off_ideal_words_penalty,
        feedback: format!(
            "Word count is acceptable but could be optimized. Ideal range: {lo}-{hi} words"
        ),
    }
}

fn sentences_choppy(ctx: &RuleContext) -> bool {
    ctx.avg_sentence_length < ctx.benchmark.ideal_sentence_length.0 - HP.choppy_sentence_margin
}

fn sentences_overlong(ctx: &RuleContext) -> bool {
    ctx.avg_sentence_length > ctx.benchmark.ideal_sentence_length.1 + HP.long_sentence_margin
}

fn sentences_ideal(ctx: &RuleContext) -> bool {
    let (lo, hi) = ctx.benchmark.ideal_sentence_length;
    lo <= ctx.avg_sentence_length && ctx.avg_sentence_length <= hi
}

fn choppy_sentences(ctx: &RuleContext) -> Effect {
    let (lo, hi) = ctx.benchmark.ideal_sentence_length;
    Effect::Penalty {
        points: HP.choppy_sentence_penalty,
        feedback: format!(
            "Sentences are too short (avg {:.1} words). This can make writing choppy. Aim for {lo}-{hi} words.",
            ctx.avg_sentence_length
        ),
    }
}

fn overlong_sentences(ctx: &RuleContext) -> Effect {
    let (lo, hi) = ctx.benchmark.ideal_sentence_length;
    Effect::Penalty {
        points: HP.long_sentence_penalty,
        feedback: format!(
            "Sentences are too long (avg {:.1} words). Break them up for clarity. Aim for {lo}-{hi} words.",
            ctx.avg_sentence_length
        ),
    }
}

fn ideal_sentences(_: &RuleContext) -> Effect {
    Effect::Strength("Good sentence length variety".to_string())
}

fn diversity_low(ctx: &RuleContext) -> bool {
    ctx.vocabulary_diversity < ctx.benchmark.min_vocabulary_diversity - HP.diversity_margin
}

fn diversity_met(ctx: &RuleContext) -> bool {
    ctx.vocabulary_diversity >= ctx.benchmark.min_vocabulary_diversity
}

fn low_diversity(ctx: &RuleContext) -> Effect {
    Effect::Penalty {
        points: HP.low_diversity_penalty,
        feedback: format!(
            "Low vocabulary diversity ({:.2}). Try using more varied word choices. Target: {:.2}",
            ctx.vocabulary_diversity, ctx.benchmark.min_vocabulary_diversity
        ),
    }
}

fn rich_vocabulary(_: &RuleContext) -> Effect {
    Effect::Strength("Excellent vocabulary diversity".to_string())
}

fn paragraphs_too_few(ctx: &RuleContext) -> bool {
    ctx.paragraphs < ctx.benchmark.ideal_paragraphs.0
}

fn paragraphs_too_many(ctx: &RuleContext) -> bool {
    ctx.paragraphs as f64 > ctx.benchmark.ideal_paragraphs.1 as f64 * HP.paragraph_overflow_factor
}

fn paragraphs_ideal(ctx: &RuleContext) -> bool {
    let (lo, hi) = ctx.benchmark.ideal_paragraphs;
    (lo..=hi).contains(&ctx.paragraphs)
}

fn too_few_paragraphs(ctx: &RuleContext) -> Effect {
    let (lo, hi) = ctx.benchmark.ideal_paragraphs;
    Effect::Penalty {
        points: HP.too_few_paragraphs_penalty,
        feedback: format!(
            "Too few paragraphs ({}). Break text into {lo}-{hi} paragraphs for better structure.",
            ctx.paragraphs
        ),
    }
}

fn too_many_paragraphs(ctx: &RuleContext) -> Effect {
    let (lo, hi) = ctx.benchmark.ideal_paragraphs;
    Effect::Penalty {
        points: HP.too_many_paragraphs_penalty,
        feedback: format!(
            "Consider consolidating some paragraphs. Current: {}, Recommended: {lo}-{hi}",
            ctx.paragraphs
        ),
    }
}

fn ideal_paragraphs(_: &RuleContext) -> Effect {
    Effect::Strength("Well-structured paragraphs".to_string())
}

// ---------------------------------------------------------------------------
// Comparator
// ---------------------------------------------------------------------------

/// Scores a document's metrics against the benchmark for `genre_key`.
pub fn compare(
    counts: &TokenCounts,
    lexical: &LexicalProfile,
    genre_key: &str,
    benchmarks: &Benchmarks,
) -> ScoreReport {
    let resolved = Genre::resolve(genre_key);
    let ctx = RuleContext {
        words: counts.word_count,
        avg_sentence_length: lexical.avg_sentence_length,
        vocabulary_diversity: lexical.vocabulary_diversity,
        paragraphs: counts.paragraph_count,
        benchmark: benchmarks.get(resolved.genre),
    };

    let mut score = HP.quality_start;
    let mut feedback = Vec::new();
    let mut strengths = Vec::new();

    for rule in RULES {
        let Some(branch) = rule.branches.iter().find(|b| (b.when)(&ctx)) else {
            continue;
        };
        match (branch.then)(&ctx) {
            Effect::Penalty { points, feedback: note } => {
                tracing::debug!(metric = rule.metric, points, "quality penalty");
                score += points;
                feedback.push(note);
            }
            Effect::Strength(note) => strengths.push(note),
        }
    }

    let score = score.max(0);
    ScoreReport {
        score,
        assessment: QualityAssessment::from_score(score),
        feedback,
        strengths,
        genre: resolved.genre,
        genre_fallback: resolved.fell_back,
    }
}
