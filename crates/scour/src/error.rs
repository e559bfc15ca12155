//! Error types for the scour library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scour operations.
///
/// Only structural problems are errors. A malformed individual value (an
/// unparseable age, a bad email) is repaired by the cleaning stages and
/// never surfaces here.
#[derive(Debug, Error)]
pub enum ScourError {
    /// Error reading, writing or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structurally malformed input (no header, ragged rows, bad encoding).
    #[error("Format error at row {row}: {message}")]
    Format { row: usize, message: String },

    /// A required column is absent from the input header.
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },

    /// A value reached the projector without holding its cleaned type.
    #[error("Uncleaned value '{value}' in column '{column}' at row {row}")]
    Uncleaned {
        row: usize,
        column: String,
        value: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScourError {
    /// Map a csv error raised while reading `path`.
    ///
    /// IO failures keep their IO classification; everything else the csv
    /// reader rejects is a format problem.
    pub(crate) fn from_csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        // Record 0 is the header, so the record index is the 1-based data row.
        let row = err
            .position()
            .map(|p| p.record() as usize)
            .unwrap_or(0);

        match err.into_kind() {
            csv::ErrorKind::Io(source) => ScourError::Io {
                path: path.into(),
                source,
            },
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => ScourError::Format {
                row,
                message: format!("expected {} fields, found {}", expected_len, len),
            },
            csv::ErrorKind::Utf8 { err, .. } => ScourError::Format {
                row,
                message: format!("invalid UTF-8: {}", err),
            },
            other => ScourError::Format {
                row,
                message: format!("{:?}", other),
            },
        }
    }
}

/// Result type alias for scour operations.
pub type Result<T> = std::result::Result<T, ScourError>;
