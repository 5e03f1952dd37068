//! Any subset of the built-in tables may be replaced from TOML:
//!
//! ```toml
//! top_words = 5
//!
//! [lexicons]
//! age = ["young blood", "digital native"]
//!
//! [benchmarks.essay]
//! min_words = 250
//! ideal_words = [400, 1200]
//! max_words = 2500
//! ideal_sentence_length = [14.0, 22.0]
//! min_vocabulary_diversity = 0.5
//! ideal_paragraphs = [3, 9]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::hyperparameters::HP;
use crate::lexicon::{self, Lexicon, WordSet};
use crate::standards::Benchmarks;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How many entries `most_common_words` reports.
    pub top_words: usize,
    pub lexicons: Lexicons,
    pub benchmarks: Benchmarks,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_words: HP.default_top_words,
            lexicons: Lexicons::default(),
            benchmarks: Benchmarks::default(),
        }
    }
}

impl Config {
    /// Reads, parses and validates a TOML config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.top_words == 0 {
            return Err(ConfigError::Invalid("top_words must be at least 1".into()));
        }
        self.lexicons.validate()?;
        self.benchmarks.validate().map_err(ConfigError::Invalid)
    }
}

/// Every term list the scanners consult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lexicons {
    pub gender_male: Lexicon,
    pub gender_female: Lexicon,
    pub gender_stereotypical: Lexicon,
    pub racial: Lexicon,
    pub age: Lexicon,
    pub political_left: Lexicon,
    pub political_right: Lexicon,
    pub political_polarizing: Lexicon,
    pub ability: Lexicon,
    pub socioeconomic: Lexicon,
    pub ai_phrases: Lexicon,
    pub ai_symbols: Lexicon,
    pub formal_words: Lexicon,
    pub stop_words: WordSet,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            gender_male: Lexicon::builtin(lexicon::GENDER_MALE),
            gender_female: Lexicon::builtin(lexicon::GENDER_FEMALE),
            gender_stereotypical: Lexicon::builtin(lexicon::GENDER_STEREOTYPICAL),
            racial: Lexicon::builtin(lexicon::RACIAL),
            age: Lexicon::builtin(lexicon::AGE),
            political_left: Lexicon::builtin(lexicon::POLITICAL_LEFT),
            political_right: Lexicon::builtin(lexicon::POLITICAL_RIGHT),
            political_polarizing: Lexicon::builtin(lexicon::POLITICAL_POLARIZING),
            ability: Lexicon::builtin(lexicon::ABILITY),
            socioeconomic: Lexicon::builtin(lexicon::SOCIOECONOMIC),
            ai_phrases: Lexicon::builtin(lexicon::AI_PHRASES),
            ai_symbols: Lexicon::builtin(lexicon::AI_SYMBOLS),
            formal_words: Lexicon::builtin(lexicon::FORMAL_WORDS),
            stop_words: WordSet::builtin(lexicon::STOP_WORDS),
        }
    }
}

impl Lexicons {
    fn named(&self) -> [(&'static str, &Lexicon); 13] {
        [
            ("gender_male", &self.gender_male),
            ("gender_female", &self.gender_female),
            ("gender_stereotypical", &self.gender_stereotypical),
            ("racial", &self.racial),
            ("age", &self.age),
            ("political_left", &self.political_left),
            ("political_right", &self.political_right),
            ("political_polarizing", &self.political_polarizing),
            ("ability", &self.ability),
            ("socioeconomic", &self.socioeconomic),
            ("ai_phrases", &self.ai_phrases),
            ("ai_symbols", &self.ai_symbols),
            ("formal_words", &self.formal_words),
        ]
    }

    fn validate(&self) -> ConfigResult<()> {
        for (name, lexicon) in self.named() {
            if let Some(entry) = lexicon.blank_entry() {
                return Err(ConfigError::Invalid(format!(
                    "lexicon `{name}` has an entry with nothing to match: {:?}",
                    entry.term
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standards::Genre;

    #[test]
    fn builtin_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_override_keeps_other_tables() {
        let config = Config::from_toml_str(
            r#"
            top_words = 3

            [lexicons]
            age = ["greybeard"]

            [benchmarks.letter]
            min_words = 100
            ideal_words = [150, 300]
            max_words = 400
            ideal_sentence_length = [10.0, 18.0]
            min_vocabulary_diversity = 0.45
            ideal_paragraphs = [2, 5]
            "#,
        )
        .unwrap();

        assert_eq!(config.top_words, 3);
        assert_eq!(config.lexicons.age.len(), 1);
        assert_eq!(config.lexicons.racial, Lexicons::default().racial);
        assert_eq!(config.benchmarks.get(Genre::Letter).min_words, 100);
        assert_eq!(config.benchmarks.get(Genre::Essay).min_words, 300);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("[lexicons]\nzodiac = [\"leo\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn blank_lexicon_entry_is_rejected() {
        let err = Config::from_toml_str("[lexicons]\nracial = [\"(annotation only)\"]\n")
            .unwrap_err();
        assert!(err.to_string().contains("racial"));
    }

    #[test]
    fn zero_top_words_is_rejected() {
        let err = Config::from_toml_str("top_words = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn inverted_benchmark_range_is_rejected() {
        let err = Config::from_toml_str(
            r#"
            [benchmarks.resume]
            min_words = 200
            ideal_words = [600, 300]
            max_words = 800
            ideal_sentence_length = [10.0, 15.0]
            min_vocabulary_diversity = 0.6
            ideal_paragraphs = [4, 8]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("resume"));
    }
}
