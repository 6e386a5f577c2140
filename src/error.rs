use std::path::PathBuf;

use thiserror::Error;

/// Conditions that stop the report before anything is printed.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Run directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Run directory is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl ReportError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::NotFound(_) | ReportError::NotADirectory(_) => 2,
            ReportError::CurrentDir(_) => 1,
        }
    }
}

/// A single run record that could not be loaded. Always absorbed by the caller.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
