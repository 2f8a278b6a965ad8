//! OpenAI-compatible chat completions provider
//!
//! Talks to any endpoint implementing `POST {base_url}/chat/completions`
//! (Groq by default). Calls are blocking and bounded by the configured
//! timeout.
//!
//! # Examples
//!
//! ```no_run
//! use fnol_llm::{ChatCompletionsProvider, LlmConfig, LlmSettings};
//! use fnol_domain::traits::LlmProvider;
//!
//! # fn example() -> Result<(), fnol_llm::LlmError> {
//! let settings = LlmSettings::from_env(&LlmConfig::default())?;
//! let provider = ChatCompletionsProvider::new(settings)?;
//! let text = provider.generate("You are terse.", "Say hello")?;
//! # Ok(())
//! # }
//! ```

use crate::settings::LlmSettings;
use crate::LlmError;
use fnol_domain::traits::LlmProvider as LlmProviderTrait;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Base delay between retries; doubled after each attempt
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Chat completions provider
pub struct ChatCompletionsProvider {
    settings: LlmSettings,
    client: Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Pull the first choice's text out of a response body
fn parse_response(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no message content".to_string()))
}

/// Whether another attempt could succeed
fn is_retryable(error: &LlmError) -> bool {
    matches!(
        error,
        LlmError::Communication(_) | LlmError::Timeout(_) | LlmError::RateLimitExceeded
    )
}

impl ChatCompletionsProvider {
    /// Create a provider from resolved settings
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { settings, client })
    }

    /// Settings in use
    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url)
    }

    fn attempt(&self, request: &ChatRequest<'_>) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(self.settings.timeout.as_secs())
                } else {
                    LlmError::Communication(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.settings.model.clone()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LlmError::MissingCredentials(format!("API key rejected (HTTP {})", status)));
        }

        let body = response
            .text()
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;
        if !status.is_success() {
            let error = LlmError::Communication(format!("HTTP {}: {}", status, body.trim()));
            if status.is_server_error() {
                return Err(error);
            }
            return Err(LlmError::Other(error.to_string()));
        }
        parse_response(&body)
    }
}

impl LlmProviderTrait for ChatCompletionsProvider {
    type Error = LlmError;

    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let attempts = self.settings.max_retries + 1;
        let mut attempt = 0;
        loop {
            attempt += 1;
            debug!(model = %self.settings.model, attempt, "Requesting chat completion");
            match self.attempt(&request) {
                Ok(text) => return Ok(text),
                Err(e) if attempt < attempts && is_retryable(&e) => {
                    // Exponential backoff: 500ms, 1s, 2s, ...
                    let delay = Duration::from_millis(RETRY_BASE_DELAY_MS * 2u64.pow(attempt - 1));
                    warn!(error = %e, attempt, delay_ms = delay.as_millis() as u64, "Chat completion failed, retrying");
                    std::thread::sleep(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}
