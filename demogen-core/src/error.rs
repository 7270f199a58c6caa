//! Error types for demogen.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while generating and writing demo records.
#[derive(Error, Debug)]
pub enum DemoGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Header serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid weight table: {0}")]
    Random(#[from] rand::distributions::WeightedError),

    #[error("Cannot pick from empty table: {0}")]
    EmptyTable(&'static str),

    #[error("Date out of range: {days} days from {from}")]
    DateOutOfRange { from: NaiveDate, days: i64 },
}

impl DemoGenError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DemoGenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for demogen operations.
pub type DemoGenResult<T> = Result<T, DemoGenError>;
