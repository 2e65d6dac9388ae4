//! Loader error types.

use thiserror::Error;

/// Errors raised while loading exposure records.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV or a value of the wrong type.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A well-formed row carrying unusable values.
    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord {
        /// 1-based data row (the header is row 0).
        row: usize,
        /// What was wrong with the row.
        reason: String,
    },
}

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;
