//! Error types for fleet-output.

use thiserror::Error;

use fleet_sim::SinkError;

/// Errors that can occur when writing fleet output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;

impl From<OutputError> for SinkError {
    fn from(error: OutputError) -> Self {
        SinkError::backend(error)
    }
}
