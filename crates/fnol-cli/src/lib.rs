//! FNOL CLI library.
//!
//! Argument parsing, configuration lookup, logging setup and report
//! formatting for the `fnol` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod process;

pub use cli::{Cli, CliFormat};
pub use config::{Config, OutputFormat, Settings};
pub use error::{CliError, Result};
pub use output::Formatter;
