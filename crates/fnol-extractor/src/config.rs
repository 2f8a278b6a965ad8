//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Longest value accepted for a single field (characters)
    ///
    /// Longer captures are almost always template prose rather than an answer.
    pub max_value_length: usize,

    /// Largest document accepted (bytes)
    pub max_document_bytes: u64,

    /// Accept `Label value` lines with no `:` or `-` separator
    pub allow_whitespace_separator: bool,

    /// Additional values treated as "not filled in" (case-insensitive)
    pub extra_placeholders: Vec<String>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_value_length == 0 {
            return Err("max_value_length must be greater than 0".to_string());
        }
        if self.max_document_bytes == 0 {
            return Err("max_document_bytes must be greater than 0".to_string());
        }
        if self.extra_placeholders.iter().any(|p| p.trim().is_empty()) {
            return Err("extra_placeholders must not contain blank entries".to_string());
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_value_length: 200,
            max_document_bytes: 20 * 1024 * 1024,
            allow_whitespace_separator: true,
            extra_placeholders: Vec::new(),
        }
    }
}
