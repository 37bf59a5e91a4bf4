// File: crates/hospital-data/src/error.rs
// Summary: Error type for generating, storing and loading patient datasets.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unexpected header: expected `{expected}`, found `{found}`")]
    HeaderMismatch { expected: String, found: String },
    #[error("{} contains no patient records", .0.display())]
    Empty(PathBuf),
    #[error("parse error: {0}")]
    Parse(String),
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
