//! Validator configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the record to validate against is chosen from a multi-line file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordSelection {
    /// Match the record's `file` key against the document; first record when
    /// no record names a file
    #[default]
    ByDocument,
    /// Always the first record
    First,
}

impl fmt::Display for RecordSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelection::ByDocument => f.write_str("by-document"),
            RecordSelection::First => f.write_str("first"),
        }
    }
}

/// Configuration for the Validator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Record selection strategy
    pub selection: RecordSelection,

    /// Largest number of records read from one file
    pub max_records: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            selection: RecordSelection::ByDocument,
            max_records: 10_000,
        }
    }
}

impl ValidatorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_records == 0 {
            return Err("max_records must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
