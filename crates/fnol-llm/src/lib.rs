//! FNOL LLM Provider Layer
//!
//! Optional natural-language explanations for routing decisions.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `fnol-domain`. The LLM never decides anything: it is handed the extracted
//! fields and the rule-based decision and asked to explain them. Every error it
//! returns is treated by callers as "reasoning unavailable".
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `ChatCompletionsProvider`: OpenAI-compatible chat completions API (Groq by default)
//!
//! # Examples
//!
//! ```
//! use fnol_llm::MockProvider;
//! use fnol_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("system", "user").unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod chat;
pub mod config;
pub mod prompt;
pub mod settings;

use fnol_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use chat::ChatCompletionsProvider;
pub use config::LlmConfig;
pub use prompt::ReasoningPrompt;
pub use settings::LlmSettings;

/// Errors that can occur during LLM operations
///
/// None of these are fatal to the pipeline.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured
    #[error("LLM credentials not configured: {0}")]
    MissingCredentials(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Request did not complete within the timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network
/// calls. Responses are keyed by the user prompt.
///
/// # Examples
///
/// ```
/// use fnol_llm::MockProvider;
/// use fnol_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("sys", "any prompt").unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.generate("sys", "prompt1").unwrap(), "response1");
/// assert_eq!(provider.generate("sys", "prompt2").unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Option<String>,
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Some(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a MockProvider that fails every call, like an unreachable service
    pub fn failing() -> Self {
        Self {
            default_response: None,
            ..Self::new("")
        }
    }

    /// Add a specific response for a given user prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(prompt.into(), Some(response.into()));
        }
    }

    /// Configure to return an error for a specific user prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(prompt.into(), None);
        }
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let responses = self
            .responses
            .lock()
            .map_err(|_| LlmError::Other("Mock state poisoned".to_string()))?;
        let response = match responses.get(user_prompt) {
            Some(configured) => configured.clone(),
            None => self.default_response.clone(),
        };
        response.ok_or_else(|| LlmError::Communication("Mock error".to_string()))
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
