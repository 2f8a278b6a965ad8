//! Validator error types

use thiserror::Error;

/// Errors that can occur while loading or selecting expected records
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The expected file could not be read
    #[error("Failed to read expected file '{path}': {source}")]
    Io {
        /// Path of the expected file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line is not a JSON object
    #[error("Malformed expected record on line {line}: {reason}")]
    ExpectedFormat {
        /// 1-based line number
        line: usize,
        /// What went wrong
        reason: String,
    },

    /// The file holds no records
    #[error("Expected file '{path}' contains no records")]
    EmptyExpected {
        /// Path of the expected file
        path: String,
    },

    /// Records name documents, but none names this one
    #[error("No expected record matches document '{document}'")]
    NoMatchingRecord {
        /// Document being validated
        document: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ValidationError {
    /// Whether the expected file was readable but its content unusable
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ValidationError::ExpectedFormat { .. }
                | ValidationError::EmptyExpected { .. }
                | ValidationError::NoMatchingRecord { .. }
        )
    }
}
