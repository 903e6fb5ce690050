//! Errors raised while reading a dataset.
//!
//! Every variant means the same thing to callers: the dataset is unavailable
//! and no partial result exists.

use std::path::PathBuf;

/// A dataset could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Backing file does not exist.
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Backing file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row is malformed (missing column, wrong field count, bad number).
    #[error("malformed data in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A float column holds `NaN` or an infinity, which JSON cannot carry.
    #[error("malformed data in {}: non-finite {column} on row {row}", path.display())]
    NonFinite {
        path: PathBuf,
        row: usize,
        column: &'static str,
    },

    /// Backing file exceeds the configured size ceiling.
    #[error("data file {} is {size} bytes (limit {limit})", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

impl DataError {
    /// Path of the file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataError::NotFound { path }
            | DataError::Io { path, .. }
            | DataError::Csv { path, .. }
            | DataError::NonFinite { path, .. }
            | DataError::TooLarge { path, .. } => path,
        }
    }

    /// Wrap an I/O error, distinguishing a missing file.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::NotFound { path }
        } else {
            DataError::Io { path, source }
        }
    }
}

/// Result alias for the data layer.
pub type DataResult<T> = Result<T, DataError>;
