//! Router error types

use thiserror::Error;

/// Errors that can occur while building a Router
#[derive(Error, Debug)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
