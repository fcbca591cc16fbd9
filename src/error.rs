use thiserror::Error;

/// Convenience result type for fallible operations in this crate.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Error type returned by the fallible parts of the crate.
///
/// Detectors, scorers and decomposers are total and never produce this error. It is raised
/// when validating caller-supplied inputs (reference lists, thresholds) and when reading
/// tables or reference lists from disk.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON table input could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The caller violated an input contract (malformed reference list, bad threshold, ...).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A requested column is not present in the table.
    #[error("column '{column}' not found. available: {available:?}")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// The input file has a shape the table readers cannot use.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}

impl ClassifyError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
