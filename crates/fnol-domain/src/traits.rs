//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (fnol-llm). The pipeline treats
/// every error from a provider as non-fatal.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for a system instruction and a user prompt
    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error>;

    /// Model identifier, for logging
    fn model_name(&self) -> &str;
}
