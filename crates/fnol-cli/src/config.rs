//! Configuration file lookup for the CLI.
//!
//! The file carries the pipeline sections (`[extractor]`, `[validation]`,
//! `[router]`, `[llm]`) plus an `[output]` section for the CLI itself.

use crate::error::{CliError, Result};
use fnol_pipeline::FnolConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Pipeline sections
    pub pipeline: FnolConfig,

    /// Output settings
    pub settings: Settings,
}

/// Output settings from the `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON report
    Json,
    /// Human-readable summary
    Table,
    /// Route only
    Quiet,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    #[serde(default)]
    output: Settings,
}

impl Config {
    /// Default configuration file path, `~/.fnol/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".fnol").join("config.toml"))
    }

    /// Load an explicit file, else the default file when it exists, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Ok(path) if path.is_file() => Self::load_from(&path),
            _ => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "Loaded configuration");
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let pipeline = FnolConfig::from_toml(contents)?;
        let section: OutputSection = toml::from_str(contents)?;
        Ok(Self {
            pipeline,
            settings: section.output,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Json,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Json
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.pipeline.llm.enabled);
    }

    #[test]
    fn test_output_section() {
        let config = Config::from_toml(
            r#"
[output]
color = false
format = "table"

[router]
fast_track_threshold = 1000.0
"#,
        )
        .unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.pipeline.router.fast_track_threshold, 1000.0);
    }

    #[test]
    fn test_invalid_pipeline_section() {
        let err = Config::from_toml("[llm]\ntemperature = 9.0").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"quiet\"").unwrap();
        let config = Config::resolve(Some(file.path())).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Quiet);
    }

    #[test]
    fn test_explicit_missing_file() {
        let err = Config::resolve(Some(Path::new("/nonexistent/fnol.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/fnol.toml"));
    }
}
