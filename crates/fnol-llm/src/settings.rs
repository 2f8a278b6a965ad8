//! Runtime settings resolved from the environment

use crate::config::LlmConfig;
use crate::LlmError;
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable selecting the model
pub const MODEL_VAR: &str = "GROQ_MODEL";

/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "FNOL_LLM_BASE_URL";

/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_VAR: &str = "FNOL_LLM_TIMEOUT_SECS";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Groq's OpenAI-compatible API
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Everything needed to call the chat completions endpoint
#[derive(Clone)]
pub struct LlmSettings {
    /// Bearer token
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Extra attempts after a failed request
    pub max_retries: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Response length limit
    pub max_tokens: u32,
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl LlmSettings {
    /// Resolve settings from process environment variables
    pub fn from_env(config: &LlmConfig) -> Result<Self, LlmError> {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup
    ///
    /// A missing or blank API key yields [`LlmError::MissingCredentials`].
    /// Environment values take precedence over `config`.
    pub fn from_lookup<F>(config: &LlmConfig, lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = non_blank(API_KEY_VAR)
            .ok_or_else(|| LlmError::MissingCredentials(format!("{} is not set", API_KEY_VAR)))?;
        let model = non_blank(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_blank(BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeout_secs = match non_blank(TIMEOUT_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| LlmError::Other(format!("{} must be a positive integer, got '{}'", TIMEOUT_VAR, raw)))?,
            None => config.timeout_secs,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            max_retries: config.max_retries,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}
