use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn one estimates document into a record. Never fatal to a run: the leaf is
/// skipped.
#[derive(Debug, Error)]
pub enum EstimateParseError {
    #[error("Failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Failed to deserialize {}: {source}", path.display())]
    Deserialize { path: PathBuf, source: serde_json::Error },
    #[error("Missing field `{field}` in {}", path.display())]
    MissingField { path: PathBuf, field: &'static str },
}

/// Errors that stop a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Criterion directory not found: {}", .0.display())]
    CriterionDirNotFound(PathBuf),
    #[error("No benchmark data found in {}", .0.display())]
    NoBenchmarkData(PathBuf),
    #[error("Failed to list {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFileError(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
