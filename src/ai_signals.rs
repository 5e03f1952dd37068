use std::collections::HashSet;

use serde::Serialize;

use crate::config::Lexicons;
use crate::hyperparameters::HP;
use crate::tokenize;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiAssessment {
    VeryHumanLike,
    MostlyHuman,
    PossiblyAi,
    LikelyAi,
    VeryLikelyAi,
}

impl AiAssessment {
    pub fn from_score(score: u32) -> Self {
        if score < HP.ai_band_very_human_max {
            Self::VeryHumanLike
        } else if score < HP.ai_band_mostly_human_max {
            Self::MostlyHuman
        } else if score < HP.ai_band_possible_max {
            Self::PossiblyAi
        } else if score < HP.ai_band_likely_max {
            Self::LikelyAi
        } else {
            Self::VeryLikelyAi
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::VeryHumanLike => "Appears very human-like",
            Self::MostlyHuman => "Appears mostly human-written",
            Self::PossiblyAi => "May be AI-generated or heavily edited",
            Self::LikelyAi => "Likely AI-generated",
            Self::VeryLikelyAi => "Very likely AI-generated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiLikelihood {
    pub score: u32,
    pub assessment: AiAssessment,
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Rule plumbing
// ---------------------------------------------------------------------------

struct SignalContext<'a> {
    text: &'a str,
    text_lower: String,
    token_count: usize,
    sentences: Vec<&'a str>,
    lexicons: &'a Lexicons,
}

#[derive(Default)]
struct RuleOutput {
    points: u32,
    indicators: Vec<String>,
}

impl RuleOutput {
    fn hit(points: u32, indicator: String) -> Self {
        Self {
            points,
            indicators: vec![indicator],
        }
    }
}

type SignalRule = fn(&SignalContext) -> RuleOutput;

/// Evaluated in order; indicators are reported in the same order.
const RULES: &[SignalRule] = &[
    rule_ai_phrases,
    rule_ai_symbols,
    rule_formality,
    rule_missing_contractions,
    rule_long_sentences,
    rule_repeated_openers,
];

// ---------------------------------------------------------------------------
// Rule implementations
// ---------------------------------------------------------------------------

fn rule_ai_phrases(ctx: &SignalContext) -> RuleOutput {
    let mut out = RuleOutput::default();
    for entry in ctx.lexicons.ai_phrases.matches(&ctx.text_lower) {
        out.points += HP.ai_phrase_points;
        out.indicators
            .push(format!("Contains AI phrase: '{}'", entry.term));
    }
    out
}

fn rule_ai_symbols(ctx: &SignalContext) -> RuleOutput {
    let count = ctx.lexicons.ai_symbols.matches(&ctx.text_lower).count();
    if count == 0 {
        return RuleOutput::default();
    }
    RuleOutput::hit(
        count as u32 * HP.ai_symbol_points,
        format!("Contains {count} AI-typical symbols"),
    )
}

fn rule_formality(ctx: &SignalContext) -> RuleOutput {
    let count = ctx.lexicons.formal_words.matches(&ctx.text_lower).count();
    if count <= HP.formal_word_threshold {
        return RuleOutput::default();
    }
    RuleOutput::hit(
        count as u32 * HP.formal_word_points,
        format!("High formality: {count} formal words"),
    )
}

fn rule_missing_contractions(ctx: &SignalContext) -> RuleOutput {
    let has_contraction = tokenize::tokens(ctx.text).any(|t| t.contains('\''));
    if ctx.token_count > HP.no_contraction_min_words && !has_contraction {
        return RuleOutput::hit(
            HP.no_contraction_points,
            "No contractions used (overly formal)".to_string(),
        );
    }
    RuleOutput::default()
}

fn rule_long_sentences(ctx: &SignalContext) -> RuleOutput {
    if ctx.sentences.is_empty() {
        return RuleOutput::default();
    }
    let total: usize = ctx
        .sentences
        .iter()
        .map(|s| tokenize::tokens(s).count())
        .sum();
    let avg = total as f64 / ctx.sentences.len() as f64;
    if avg > HP.long_sentence_words {
        return RuleOutput::hit(
            HP.long_sentence_points,
            format!("Very long average sentence length: {avg:.1} words"),
        );
    }
    RuleOutput::default()
}

fn rule_repeated_openers(ctx: &SignalContext) -> RuleOutput {
    let openers: Vec<&str> = ctx
        .sentences
        .iter()
        .filter_map(|s| tokenize::tokens(s).next())
        .collect();
    let distinct: HashSet<&str> = openers.iter().copied().collect();
    if openers.len() > HP.repeated_opener_min_sentences && distinct.len() != openers.len() {
        return RuleOutput::hit(
            HP.repeated_opener_points,
            "Repetitive sentence structures".to_string(),
        );
    }
    RuleOutput::default()
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

fn recommendations(score: u32) -> Vec<String> {
    if score < HP.ai_band_very_human_max {
        return vec!["Text already appears natural!".to_string()];
    }

    let mut advice = Vec::new();
    if score >= HP.ai_advice_basic_min {
        advice.extend([
            "Add contractions to sound more conversational",
            "Replace formal words with simpler alternatives",
            "Vary sentence structure and length",
        ]);
    }
    if score >= HP.ai_advice_strong_min {
        advice.extend([
            "Remove AI-typical phrases and symbols",
            "Break up long, complex sentences",
            "Add more personal voice and natural expressions",
        ]);
    }
    advice.into_iter().map(String::from).collect()
}

#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn score(text: &str, lexicons: &Lexicons) -> AiLikelihood {
    let ctx = SignalContext {
        text,
        text_lower: text.to_lowercase(),
        token_count: tokenize::tokens(text).count(),
        sentences: tokenize::sentences(text),
        lexicons,
    };

    let mut raw = 0u32;
    let mut indicators = Vec::new();
    for rule in RULES {
        let out = rule(&ctx);
        raw += out.points;
        indicators.extend(out.indicators);
    }

    let score = raw.min(HP.ai_score_max);
    tracing::debug!(raw, score, "ai likelihood scored");

    AiLikelihood {
        score,
        assessment: AiAssessment::from_score(score),
        indicators,
        recommendations: recommendations(score),
    }
}
