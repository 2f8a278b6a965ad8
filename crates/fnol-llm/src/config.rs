//! Configuration for LLM reasoning

use serde::{Deserialize, Serialize};

/// Configuration for LLM reasoning (`[llm]` section)
///
/// Credentials are never read from here; see [`crate::LlmSettings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Ask the LLM to explain routing decisions when credentials exist
    pub enabled: bool,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Extra attempts after a failed request
    pub max_retries: u32,

    /// Sampling temperature (0.0-2.0)
    pub temperature: f32,

    /// Upper bound on the length of the explanation (tokens)
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: 20,
            max_retries: 1,
            temperature: 0.2,
            max_tokens: 200,
        }
    }
}

impl LlmConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries > 5 {
            return Err("max_retries must be at most 5".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LlmConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_timeout = LlmConfig {
            timeout_secs: 0,
            ..LlmConfig::default()
        };
        assert!(zero_timeout.validate().is_err());

        let hot = LlmConfig {
            temperature: 3.5,
            ..LlmConfig::default()
        };
        assert!(hot.validate().is_err());
    }

    #[test]
    fn test_partial_toml() {
        let config = LlmConfig::from_toml("enabled = false\nmax_tokens = 80").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.max_tokens, 80);
        assert_eq!(config.timeout_secs, 20);

        let parsed = LlmConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
