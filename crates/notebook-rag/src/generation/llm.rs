//! LLM provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for text-completion providers
///
/// The rest of the system treats the model as an opaque completion service: a
/// prompt goes in, text comes out. Implementations own their transport,
/// timeout, and retry policy.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Complete a prompt into generated text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
