use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`Config`](crate::config::Config).
///
/// Per-call analysis never fails; everything that can go wrong happens
/// once, when the lexicons and benchmark tables are loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
