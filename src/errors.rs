use std::{io, path::PathBuf};

use thiserror::Error;

/// Rejection raised by the entry form when the amount is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount.")]
    MissingAmount,
    #[error("Please enter a valid amount (`{0}` is not a number).")]
    NotANumber(String),
    #[error("Please enter a valid amount (`{0}` must be greater than zero).")]
    NonPositive(String),
}

/// Failure while writing an export artifact to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while loading or saving user preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Unknown setting `{0}`")]
    UnknownKey(String),
    #[error("Invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}
