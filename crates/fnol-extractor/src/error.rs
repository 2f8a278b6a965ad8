//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The document could not be read or parsed
    #[error("Failed to read document '{path}': {reason}")]
    DocumentRead {
        /// Path or identifier of the document
        path: String,
        /// What went wrong
        reason: String,
    },

    /// Document exceeds the configured size limit
    #[error("Document '{path}' is too large: {size} bytes (max: {max})")]
    DocumentTooLarge {
        /// Path or identifier of the document
        path: String,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Build a `DocumentRead` error
    pub fn document_read(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtractorError::DocumentRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the input itself was unusable
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            ExtractorError::DocumentRead { .. } | ExtractorError::DocumentTooLarge { .. }
        )
    }
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::Config(format!("Invalid label pattern: {}", e))
    }
}
