use async_trait::async_trait;

use crate::application::LlmApi;
use crate::domain::DomainError;

/// Placeholder for an OpenAI-backed provider.
///
/// Takes no configuration. Every query fails with
/// [`DomainError::NotImplemented`] instead of pretending to succeed with an
/// empty reply.
pub struct OpenAiLlm;

impl OpenAiLlm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenAiLlm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmApi for OpenAiLlm {
    async fn query(&self, _prompt: &str) -> Result<String, DomainError> {
        Err(DomainError::not_implemented("OpenAI provider is not available yet"))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
