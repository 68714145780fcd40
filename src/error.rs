//! Error types for the NACHA file generator.

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while building or persisting a NACHA file.
///
/// Configuration, validation, and empty-batch errors are data problems: the
/// run is aborted with no output and the caller corrects the inputs.
/// `FieldOverflow` is a programming defect surfaced loudly rather than
/// silently truncating a financial field. The I/O variants belong to the
/// storage boundary and are safe to retry.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Failed to read inputs or write the output artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pending-entries CSV could not be parsed
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Company settings JSON could not be parsed
    #[error("settings parsing error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Company ACH identity is incomplete; nothing was generated
    #[error("invalid ACH configuration: {}", violations.join("; "))]
    Configuration { violations: Vec<String> },

    /// One or more entries failed validation; the whole batch is rejected
    #[error("batch validation failed: {}", violations.join("; "))]
    Validation { violations: Vec<String> },

    /// No pending entries to encode
    #[error("no pending entries for batch generation")]
    EmptyBatch,

    /// A computed numeric field exceeds its declared width (internal defect)
    #[error("{record} record: field `{field}` value `{value}` exceeds width {width}")]
    FieldOverflow {
        record: &'static str,
        field: &'static str,
        value: String,
        width: usize,
    },

    /// Missing CLI arguments
    #[error("missing arguments. Usage: nacha-generator <company.json> <entries.csv> <output-dir>")]
    MissingArgument,
}

impl GeneratorError {
    /// `true` for errors that require data correction rather than a retry.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            GeneratorError::Configuration { .. }
                | GeneratorError::Validation { .. }
                | GeneratorError::EmptyBatch
        )
    }
}
