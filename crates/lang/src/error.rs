use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by language bundles and their persistence helpers.
#[derive(Debug, Error)]
pub enum LangError {
    /// A required argument was empty. Raised before any state changes.
    #[error("{0} must not be empty")]
    InvalidArgument(&'static str),
    /// The language file does not exist.
    #[error("language file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// A line looked like an entry but could not be parsed.
    #[error("malformed lang entry on line {line}: {reason}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// Wrap IO failures when reading or writing language files.
    #[error("failed to access language file: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap TOML parsing issues in bundle configuration.
    #[error("failed to parse bundle config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// Wrap TOML serialization issues in bundle configuration.
    #[error("failed to serialize bundle config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
