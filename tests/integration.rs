use prose_gauge::{
    analyze, compare_texts, compare_to_standard, detect_bias, evaluate, score_ai_likelihood,
    AiAssessment, Config, ConfigError, Engine, Genre, QualityAssessment, ReadingLevel, Severity,
};
use std::io::Write;

fn numbered_words(n: usize, per_sentence: usize) -> String {
    (0..n)
        .map(|i| {
            let sep = if (i + 1) % per_sentence == 0 { "." } else { "" };
            format!("token{i}{sep}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn plain_text_metrics() {
    let text = "The quick brown fox jumps over the lazy dog. \
                It was not amused.\n\nThe fox ran away!";
    let metrics = analyze(text);
    assert_eq!(metrics.counts.word_count, 17);
    assert_eq!(metrics.counts.sentence_count, 3);
    assert_eq!(metrics.counts.paragraph_count, 2);
    assert!(metrics.lexical.vocabulary_diversity > 0.0);
    assert!(metrics.lexical.vocabulary_diversity <= 1.0);
    assert!(metrics.readability.flesch_reading_ease > 60.0);
    assert_eq!(metrics.readability.reading_level, ReadingLevel::Elementary);
}

#[test]
fn empty_text_is_all_zeros() {
    let metrics = analyze("   \n\n  ");
    assert_eq!(metrics.counts.word_count, 0);
    assert_eq!(metrics.counts.sentence_count, 0);
    assert_eq!(metrics.lexical.vocabulary_diversity, 0.0);
    assert_eq!(metrics.readability.flesch_reading_ease, 0.0);
    assert_eq!(metrics.readability.flesch_kincaid_grade, 0.0);
    assert_eq!(metrics.reading_time_minutes, 0.0);
    assert!(metrics.lexical.most_common_words.is_empty());
}

#[test]
fn analyze_is_idempotent() {
    let text = "Rivers bend and mountains rise.\n\nClouds drift over the valley, slowly.";
    assert_eq!(analyze(text), analyze(text));
    assert_eq!(detect_bias(text), detect_bias(text));
    assert_eq!(score_ai_likelihood(text), score_ai_likelihood(text));
}

#[test]
fn gendered_terms_are_flagged() {
    let report = detect_bias("The chairman discussed mankind's progress");
    let terms: Vec<&str> = report.gender.issues.iter().map(|i| i.term.as_str()).collect();
    assert_eq!(terms, vec!["mankind", "chairman"]);
    assert!(report
        .gender
        .issues
        .iter()
        .all(|i| i.severity == Severity::Medium));
    for (name, category) in report.categories().into_iter().skip(1) {
        assert!(category.issues.is_empty(), "unexpected {name} issues");
    }
    assert!(report.overall_bias_score > 0.0);
    assert!(report.recommendations[0].contains("chairperson"));
}

#[test]
fn political_terms_report_leaning_separately() {
    let report = detect_bias("Stop calling everyone who disagrees sheep.");
    let json = serde_json::to_value(&report.political.issues[0]).unwrap();
    assert_eq!(json["term"], "sheep");
    assert_eq!(json["leaning"], "polarizing");
    assert!(json.get("category").is_none());
}

#[test]
fn clean_text_gets_no_bias_advice() {
    let report = detect_bias("The committee met on Tuesday and approved the budget.");
    assert_eq!(report.issue_count(), 0);
    assert_eq!(report.overall_bias_score, 0.0);
    assert_eq!(report.inclusivity_score, 100.0);
    assert_eq!(report.recommendations.len(), 1);
    assert!(report.recommendations[0].starts_with("Great job!"));
}

#[test]
fn ai_disclosure_with_symbols_scores_high() {
    let result = score_ai_likelihood("As an AI language model I can help ★ with this ✓ task ➤ today.");
    assert!(result.score >= 45, "expected >= 45, got {}", result.score);
    assert!(matches!(
        result.assessment,
        AiAssessment::PossiblyAi | AiAssessment::LikelyAi | AiAssessment::VeryLikelyAi
    ));
    assert!(result
        .indicators
        .iter()
        .any(|i| i.contains("As an AI language model")));
}

#[test]
fn casual_text_reads_human() {
    let result = score_ai_likelihood("I'm off to the shops. Back soon, don't wait up!");
    assert_eq!(result.score, 0);
    assert_eq!(result.assessment, AiAssessment::VeryHumanLike);
}

#[test]
fn short_essay_is_penalized() {
    let text = numbered_words(100, 10);
    let metrics = analyze(&text);
    assert_eq!(metrics.counts.word_count, 100);

    let report = compare_to_standard(&metrics, "essay");
    assert!(report.score <= 80, "expected <= 80, got {}", report.score);
    assert!(report.feedback[0].contains("300"));
    assert_eq!(report.genre, Genre::Essay);
}

#[test]
fn unknown_genre_falls_back_to_essay() {
    let analysis = evaluate("Dear team, thanks for the help.", "haiku");
    assert_eq!(analysis.quality.genre, Genre::Essay);
    assert!(analysis.quality.genre_fallback);
}

#[test]
fn well_formed_cover_letter_scores_well() {
    let paragraph = numbered_words(100, 15);
    let text = [paragraph.as_str(); 3].join("\n\n");
    let analysis = evaluate(&text, "cover_letter");
    // 300 words in 3 paragraphs and 19 sentences. Diversity is 1/3
    // because every paragraph repeats the same tokens.
    assert_eq!(analysis.metrics.counts.word_count, 300);
    assert_eq!(analysis.metrics.counts.paragraph_count, 3);
    assert_eq!(analysis.quality.score, 85);
    assert_eq!(analysis.quality.assessment, QualityAssessment::Good);
    assert_eq!(analysis.quality.strengths.len(), 3);
}

#[test]
fn comparison_tracks_revisions() {
    let before = "This is one long sentence that goes on and on without any pause at all for the reader";
    let after = "This is shorter. It reads well. The reader can rest.";
    let comparison = compare_texts(before, after);
    let sentences = comparison.change("sentence_count").unwrap();
    assert_eq!(sentences.before, 1.0);
    assert_eq!(sentences.after, 3.0);
    assert_eq!(sentences.percent_change, 200.0);
    let ease = comparison.change("flesch_reading_ease").unwrap();
    assert!(ease.difference > 0.0);
}

#[test]
fn custom_lexicon_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[lexicons]\nage = [\"greybeard\"]").unwrap();

    let engine = Engine::from_path(file.path()).unwrap();
    let report = engine.detect_bias("Ask the greybeard, he knows the old ways.");
    assert_eq!(report.age.issues.len(), 1);
    assert_eq!(report.age.issues[0].term, "greybeard");

    let builtin = detect_bias("Ask the greybeard, he knows the old ways.");
    assert!(builtin.age.issues.is_empty());
}

#[test]
fn missing_config_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Engine::from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_config_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "top_words = \"many\"").unwrap();
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn reports_serialize_to_json() {
    let metrics = analyze("Short and sweet.");
    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["counts"]["word_count"], 3);
    assert_eq!(json["readability"]["reading_level"], "elementary");

    let quality = evaluate("Short and sweet.", "cover_letter").quality;
    let json = serde_json::to_value(&quality).unwrap();
    assert_eq!(json["genre"], "cover_letter");
    assert_eq!(json["score"], 60);
    assert_eq!(json["assessment"], "acceptable");
}
