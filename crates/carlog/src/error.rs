//! Error types for the carlog application.

use std::io;
use std::path::PathBuf;

use carlog_input::InputError;

/// Errors raised while loading records, collecting makers or writing the
/// report.
#[derive(Debug, thiserror::Error)]
pub enum CarlogError {
    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file exists but could not be read.
    #[error("failed to read input file {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of the input file is not a valid record.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// The report file could not be reset or appended to.
    #[error("failed to write report {}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Maker names could not be collected.
    #[error(transparent)]
    Input(#[from] InputError),
}

impl CarlogError {
    /// Create a malformed-record error for a 1-based line number.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for carlog operations.
pub type Result<T> = std::result::Result<T, CarlogError>;
