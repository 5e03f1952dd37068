use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::Lexicons;
use crate::hyperparameters::HP;
use crate::lexicon::Lexicon;
use crate::tokenize;

static MASCULINE_PRONOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bhe\b|\bhim\b|\bhis\b").unwrap());

static FEMININE_PRONOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bshe\b|\bher\b|\bhers\b").unwrap());

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub term: String,
    /// Gender sub-category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Political leaning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaning: Option<String>,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Issue {
    fn new(term: &str, severity: Severity) -> Self {
        Self {
            term: term.to_string(),
            category: None,
            leaning: None,
            severity,
            details: None,
        }
    }

    fn tagged(term: &str, category: &str, severity: Severity) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Self::new(term, severity)
        }
    }

    fn leaning(term: &str, leaning: &str, severity: Severity) -> Self {
        Self {
            leaning: Some(leaning.to_string()),
            ..Self::new(term, severity)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// Number of issues in the category.
    pub score: usize,
    pub issues: Vec<Issue>,
}

impl From<Vec<Issue>> for CategoryReport {
    fn from(issues: Vec<Issue>) -> Self {
        Self {
            score: issues.len(),
            issues,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Accessible,
    Complex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageComplexity {
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub long_words_count: usize,
    pub readability: Accessibility,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasReport {
    pub gender: CategoryReport,
    pub racial: CategoryReport,
    pub age: CategoryReport,
    pub political: CategoryReport,
    pub ability: CategoryReport,
    pub socioeconomic: CategoryReport,
    pub language_complexity: LanguageComplexity,
    /// 0-100, lower is better.
    pub overall_bias_score: f64,
    pub inclusivity_score: f64,
    pub recommendations: Vec<String>,
}

impl BiasReport {
    pub fn categories(&self) -> [(&'static str, &CategoryReport); 6] {
        [
            ("gender", &self.gender),
            ("racial", &self.racial),
            ("age", &self.age),
            ("political", &self.political),
            ("ability", &self.ability),
            ("socioeconomic", &self.socioeconomic),
        ]
    }

    pub fn issue_count(&self) -> usize {
        self.categories().iter().map(|(_, c)| c.issues.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Scanners
// ---------------------------------------------------------------------------

fn scan(lexicon: &Lexicon, text_lower: &str, severity: Severity) -> Vec<Issue> {
    lexicon
        .matches(text_lower)
        .map(|e| Issue::new(&e.term, severity))
        .collect()
}

fn scan_tagged(
    sets: &[(&str, &Lexicon)],
    text_lower: &str,
    severity: Severity,
    make: fn(&str, &str, Severity) -> Issue,
) -> Vec<Issue> {
    sets.iter()
        .flat_map(|&(tag, lexicon)| {
            lexicon
                .matches(text_lower)
                .map(move |e| make(&e.term, tag, severity))
        })
        .collect()
}

fn pronoun_imbalance(text_lower: &str) -> Option<Issue> {
    let he = MASCULINE_PRONOUN_RE.find_iter(text_lower).count();
    let she = FEMININE_PRONOUN_RE.find_iter(text_lower).count();
    let ratio = HP.pronoun_imbalance_ratio;

    if he > she * ratio || she > he * ratio {
        Some(Issue {
            details: Some(format!("He/Him: {he}, She/Her: {she}")),
            ..Issue::tagged("Pronoun imbalance", "pronoun_bias", Severity::Low)
        })
    } else {
        None
    }
}

pub fn gender_issues(text_lower: &str, lexicons: &Lexicons) -> Vec<Issue> {
    let mut issues = scan_tagged(
        &[
            ("male", &lexicons.gender_male),
            ("female", &lexicons.gender_female),
            ("stereotypical", &lexicons.gender_stereotypical),
        ],
        text_lower,
        Severity::Medium,
        Issue::tagged,
    );
    issues.extend(pronoun_imbalance(text_lower));
    issues
}

pub fn racial_issues(text_lower: &str, lexicons: &Lexicons) -> Vec<Issue> {
    scan(&lexicons.racial, text_lower, Severity::High)
}

pub fn age_issues(text_lower: &str, lexicons: &Lexicons) -> Vec<Issue> {
    scan(&lexicons.age, text_lower, Severity::Medium)
}

pub fn political_issues(text_lower: &str, lexicons: &Lexicons) -> Vec<Issue> {
    scan_tagged(
        &[
            ("left-leaning", &lexicons.political_left),
            ("right-leaning", &lexicons.political_right),
            ("polarizing", &lexicons.political_polarizing),
        ],
        text_lower,
        Severity::High,
        Issue::leaning,
    )
}

pub fn ability_issues(text_lower: &str, lexicons: &Lexicons) -> Vec<Issue> {
    scan(&lexicons.ability, text_lower, Severity::Medium)
}

pub fn socioeconomic_issues(text_lower: &str, lexicons: &Lexicons) -> Vec<Issue> {
    scan(&lexicons.socioeconomic, text_lower, Severity::High)
}

/// Flags prose whose vocabulary or sentence length may shut readers out.
pub fn language_complexity(text: &str) -> LanguageComplexity {
    let tokens: Vec<&str> = tokenize::tokens(text).collect();
    let lengths: Vec<usize> = tokens.iter().map(|t| t.chars().count()).collect();
    let long_words_count = lengths.iter().filter(|&&n| n > HP.long_word_chars).count();

    let avg_word_length = if tokens.is_empty() {
        0.0
    } else {
        lengths.iter().sum::<usize>() as f64 / tokens.len() as f64
    };
    let avg_sentence_length =
        tokens.len() as f64 / tokenize::raw_sentence_fragment_count(text) as f64;

    let readability = if avg_word_length > HP.complex_avg_word_length
        || avg_sentence_length > HP.complex_avg_sentence_length
    {
        Accessibility::Complex
    } else {
        Accessibility::Accessible
    };

    LanguageComplexity {
        avg_word_length,
        avg_sentence_length,
        long_words_count,
        readability,
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect(text: &str, lexicons: &Lexicons) -> BiasReport {
    let text_lower = text.to_lowercase();

    let mut report = BiasReport {
        gender: gender_issues(&text_lower, lexicons).into(),
        racial: racial_issues(&text_lower, lexicons).into(),
        age: age_issues(&text_lower, lexicons).into(),
        political: political_issues(&text_lower, lexicons).into(),
        ability: ability_issues(&text_lower, lexicons).into(),
        socioeconomic: socioeconomic_issues(&text_lower, lexicons).into(),
        language_complexity: language_complexity(text),
        overall_bias_score: 0.0,
        inclusivity_score: 0.0,
        recommendations: Vec::new(),
    };

    let issue_count = report.issue_count();
    let token_count = tokenize::tokens(text).count();
    if token_count > 0 {
        report.overall_bias_score = (issue_count as f64 / token_count as f64
            * HP.bias_density_basis)
            .min(HP.bias_score_max);
    }
    report.inclusivity_score = (HP.bias_score_max - report.overall_bias_score).max(0.0);
    report.recommendations = recommendations(&report);

    tracing::debug!(
        issue_count,
        overall = report.overall_bias_score,
        "bias scan complete"
    );
    report
}

const NO_BIAS_MESSAGE: &str =
    "Great job! No significant bias detected. Continue using inclusive language.";

fn category_advice(category: &str) -> [&'static str; 2] {
    match category {
        "gender" => [
            "Use gender-neutral language (e.g., 'chairperson' instead of 'chairman', 'humanity' instead of 'mankind')",
            "Consider using 'they/them' as singular pronouns or alternate between gender pronouns",
        ],
        "racial" => [
            "Replace coded language with specific, neutral descriptions",
            "Avoid terms that may carry racial stereotypes or implications",
        ],
        "age" => [
            "Focus on skills and qualifications rather than age-related characteristics",
            "Avoid age-related stereotypes or assumptions",
        ],
        "political" => [
            "Use neutral, fact-based language instead of politically charged terms",
            "Present multiple perspectives when discussing contentious topics",
        ],
        "ability" => [
            "Use person-first language (e.g., 'person with a disability' rather than 'disabled person')",
            "Avoid metaphorical use of disability terms",
        ],
        _ => [
            "Use respectful, non-judgmental language when discussing economic status",
            "Avoid stereotypes about socioeconomic groups",
        ],
    }
}

fn recommendations(report: &BiasReport) -> Vec<String> {
    let mut advice: Vec<String> = report
        .categories()
        .into_iter()
        .filter(|(_, c)| c.score > 0)
        .flat_map(|(name, _)| category_advice(name))
        .map(String::from)
        .collect();

    if report.language_complexity.readability == Accessibility::Complex {
        advice.push("Simplify language for better accessibility and inclusivity".to_string());
        advice.push("Break long sentences into shorter, clearer statements".to_string());
    }

    if advice.is_empty() {
        advice.push(NO_BIAS_MESSAGE.to_string());
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicons() -> Lexicons {
        Lexicons::default()
    }

    fn terms(report: &CategoryReport) -> Vec<&str> {
        report.issues.iter().map(|i| i.term.as_str()).collect()
    }

    #[test]
    fn chairman_and_mankind_are_gendered() {
        let report = detect("The chairman discussed mankind's progress", &lexicons());
        assert_eq!(terms(&report.gender), vec!["mankind", "chairman"]);
        assert!(report
            .gender
            .issues
            .iter()
            .all(|i| i.severity == Severity::Medium && i.category.as_deref() == Some("male")));
        for (name, category) in report.categories().into_iter().skip(1) {
            assert!(category.issues.is_empty(), "{name} should be empty");
        }
    }

    #[test]
    fn parenthetical_annotation_is_reported_but_not_matched() {
        let report = detect("She is so articulate and exotic.", &lexicons());
        assert_eq!(
            terms(&report.racial),
            vec!["exotic", "articulate (in racial context)"]
        );
        assert!(report.racial.issues.iter().all(|i| i.severity == Severity::High));
    }

    #[test]
    fn substring_matching_fires_inside_words() {
        let report = detect("We moved to a suburban town.", &lexicons());
        assert_eq!(terms(&report.racial), vec!["urban"]);
    }

    #[test]
    fn pronoun_imbalance_uses_whole_words() {
        let issues = gender_issues("he said his plan suits him. the theme is here.", &lexicons());
        let pronoun = issues.last().unwrap();
        assert_eq!(pronoun.term, "Pronoun imbalance");
        assert_eq!(pronoun.severity, Severity::Low);
        assert_eq!(pronoun.details.as_deref(), Some("He/Him: 3, She/Her: 0"));
    }

    #[test]
    fn feminine_pronoun_imbalance_is_flagged() {
        let issues = gender_issues("she said her plan suits her", &lexicons());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category.as_deref(), Some("pronoun_bias"));
        assert_eq!(issues[0].details.as_deref(), Some("He/Him: 0, She/Her: 3"));
    }

    #[test]
    fn balanced_pronouns_are_fine() {
        let issues = gender_issues("he and she shared her notes with him", &lexicons());
        assert!(issues.is_empty());
    }

    #[test]
    fn political_issues_carry_leaning() {
        let issues = political_issues("calling critics sheep or a communist is lazy", &lexicons());
        assert!(issues.iter().all(|i| i.category.is_none()));
        let tags: Vec<(&str, Option<&str>)> = issues
            .iter()
            .map(|i| (i.term.as_str(), i.leaning.as_deref()))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("communist", Some("right-leaning")),
                ("sheep", Some("polarizing")),
            ]
        );
    }

    #[test]
    fn every_matching_entry_is_its_own_issue() {
        let report = detect("The poor crazy plan was insane.", &lexicons());
        assert_eq!(terms(&report.ability), vec!["crazy", "insane"]);
        assert_eq!(terms(&report.socioeconomic), vec!["poor"]);
    }

    #[test]
    fn overall_score_is_issue_density() {
        // 6 tokens, 2 issues: 2 / 6 * 1000 caps at 100.
        let report = detect("The chairman discussed mankind's progress today", &lexicons());
        assert_eq!(report.overall_bias_score, 100.0);
        assert_eq!(report.inclusivity_score, 0.0);

        let long = format!("The chairman spoke. {}", "Plain words follow here. ".repeat(100));
        let report = detect(&long, &lexicons());
        let tokens = tokenize::tokens(&long).count() as f64;
        assert!((report.overall_bias_score - 1.0 / tokens * 1000.0).abs() < 1e-9);
        assert!((report.inclusivity_score - (100.0 - report.overall_bias_score)).abs() < 1e-9);
    }

    #[test]
    fn empty_text_has_no_bias() {
        let report = detect("", &lexicons());
        assert_eq!(report.issue_count(), 0);
        assert_eq!(report.overall_bias_score, 0.0);
        assert_eq!(report.inclusivity_score, 100.0);
        assert_eq!(report.recommendations, vec![NO_BIAS_MESSAGE.to_string()]);
    }

    #[test]
    fn recommendations_follow_categories() {
        let report = detect("The chairman was a digital native.", &lexicons());
        assert_eq!(report.recommendations.len(), 4);
        assert!(report.recommendations[0].starts_with("Use gender-neutral language"));
        assert!(report.recommendations[2].starts_with("Focus on skills"));
    }

    #[test]
    fn long_sentences_are_complex() {
        let text = "word ".repeat(30);
        let complexity = language_complexity(&text);
        assert_eq!(complexity.avg_sentence_length, 30.0);
        assert_eq!(complexity.readability, Accessibility::Complex);

        let simple = language_complexity("Short words here. And more.");
        assert_eq!(simple.readability, Accessibility::Accessible);
        assert_eq!(simple.long_words_count, 0);
    }

    #[test]
    fn long_words_are_complex() {
        let complexity =
            language_complexity("Extraordinarily complicated terminology. Unquestionably.");
        assert_eq!(complexity.avg_word_length, 53.0 / 4.0);
        assert!(complexity.avg_sentence_length < HP.complex_avg_sentence_length);
        assert_eq!(complexity.long_words_count, 4);
        assert_eq!(complexity.readability, Accessibility::Complex);
    }
}
