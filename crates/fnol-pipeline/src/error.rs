//! Pipeline error types

use fnol_extractor::ExtractorError;
use fnol_router::RouterError;
use fnol_validator::ValidationError;
use thiserror::Error;

/// Errors loading or checking the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path of the config file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A section failed validation
    #[error("Invalid configuration in [{section}]: {reason}")]
    Invalid {
        /// Config section name
        section: &'static str,
        /// What is wrong
        reason: String,
    },
}

/// Errors that stop the pipeline without producing a report
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The document could not be read or parsed
    #[error(transparent)]
    Extraction(#[from] ExtractorError),

    /// Validation failed and validation was required
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Router configuration was rejected
    #[error(transparent)]
    Router(#[from] RouterError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}
