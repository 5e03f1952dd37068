// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    // Readability
    pub fre_base: f64,
    pub fre_sentence_weight: f64,
    pub fre_syllable_weight: f64,
    pub fkg_sentence_weight: f64,
    pub fkg_syllable_weight: f64,
    pub fkg_offset: f64,
    pub reading_words_per_minute: f64,
    pub min_content_word_chars: usize,
    pub default_top_words: usize,

    // Bias
    pub pronoun_imbalance_ratio: usize,
    pub bias_density_basis: f64,
    pub bias_score_max: f64,
    pub long_word_chars: usize,
    pub complex_avg_word_length: f64,
    pub complex_avg_sentence_length: f64,

    // AI likelihood
    pub ai_phrase_points: u32,
    pub ai_symbol_points: u32,
    pub formal_word_points: u32,
    pub formal_word_threshold: usize,
    pub no_contraction_min_words: usize,
    pub no_contraction_points: u32,
    pub long_sentence_words: f64,
    pub long_sentence_points: u32,
    pub repeated_opener_min_sentences: usize,
    pub repeated_opener_points: u32,
    pub ai_score_max: u32,
    pub ai_band_very_human_max: u32,
    pub ai_band_mostly_human_max: u32,
    pub ai_band_possible_max: u32,
    pub ai_band_likely_max: u32,
    pub ai_advice_basic_min: u32,
    pub ai_advice_strong_min: u32,

    // Standards
    pub quality_start: i32,
    pub too_short_penalty: i32,
    pub too_long_penalty: i32,
    pub off_ideal_words_penalty: i32,
    pub choppy_sentence_margin: f64,
    pub choppy_sentence_penalty: i32,
    pub long_sentence_margin: f64,
    pub long_sentence_penalty: i32,
    pub diversity_margin: f64,
    pub low_diversity_penalty: i32,
    pub too_few_paragraphs_penalty: i32,
    pub paragraph_overflow_factor: f64,
    pub too_many_paragraphs_penalty: i32,
    pub band_excellent_min: i32,
    pub band_good_min: i32,
    pub band_acceptable_min: i32,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    fre_base: 206.835,
    fre_sentence_weight: 1.015,
    fre_syllable_weight: 84.6,
    fkg_sentence_weight: 0.39,
    fkg_syllable_weight: 11.8,
    fkg_offset: 15.59,
    reading_words_per_minute: 225.0,
    min_content_word_chars: 4,
    default_top_words: 10,

    pronoun_imbalance_ratio: 2,
    bias_density_basis: 1000.0,
    bias_score_max: 100.0,
    long_word_chars: 10,
    complex_avg_word_length: 6.0,
    complex_avg_sentence_length: 25.0,

    ai_phrase_points: 15,
    ai_symbol_points: 10,
    formal_word_points: 5,
    formal_word_threshold: 3,
    no_contraction_min_words: 50,
    no_contraction_points: 20,
    long_sentence_words: 25.0,
    long_sentence_points: 15,
    repeated_opener_min_sentences: 3,
    repeated_opener_points: 10,
    ai_score_max: 100,
    ai_band_very_human_max: 20,
    ai_band_mostly_human_max: 40,
    ai_band_possible_max: 60,
    ai_band_likely_max: 80,
    ai_advice_basic_min: 40,
    ai_advice_strong_min: 60,

    quality_start: 100,
    too_short_penalty: -20,
    too_long_penalty: -10,
    off_ideal_words_penalty: -5,
    choppy_sentence_margin: 5.0,
    choppy_sentence_penalty: -10,
    long_sentence_margin: 10.0,
    long_sentence_penalty: -15,
    diversity_margin: 0.1,
    low_diversity_penalty: -15,
    too_few_paragraphs_penalty: -10,
    paragraph_overflow_factor: 1.5,
    too_many_paragraphs_penalty: -5,
    band_excellent_min: 90,
    band_good_min: 75,
    band_acceptable_min: 60,
};
