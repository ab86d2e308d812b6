use async_trait::async_trait;

use crate::domain::DomainError;

/// Sends a prompt to a language model and returns its full reply.
///
/// Implementors own transport and vendor-specific details. Every provider
/// fault is reported as [`DomainError::QueryFailed`] (or
/// [`DomainError::NotImplemented`] for placeholder providers); there is no
/// retry and no caching.
#[async_trait]
pub trait LlmApi: Send + Sync {
    async fn query(&self, prompt: &str) -> Result<String, DomainError>;

    /// Short provider identifier used in logs.
    fn provider_name(&self) -> &str;
}
