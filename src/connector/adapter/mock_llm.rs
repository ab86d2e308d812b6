use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::LlmApi;
use crate::domain::DomainError;

/// Offline [`LlmApi`] that answers deterministically without any network call.
///
/// The reply quotes the `Question:` line of the prompt when there is one, so a
/// chat run against it still shows which question was answered.
pub struct MockLlm {
    calls: AtomicUsize,
}

impl MockLlm {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmApi for MockLlm {
    async fn query(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let question = prompt
            .lines()
            .find_map(|line| line.strip_prefix("Question: "))
            .map(str::trim)
            .unwrap_or("");

        Ok(format!(
            "[mock] {} bytes of prompt received. Question: \"{}\"",
            prompt.len(),
            question
        ))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build_prompt;

    #[tokio::test]
    async fn test_mock_llm_quotes_question() {
        let llm = MockLlm::new();
        let prompt = build_prompt("some context", "What is it?");

        let reply = llm.query(&prompt).await.unwrap();

        assert!(reply.contains("\"What is it?\""));
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_llm_is_deterministic() {
        let llm = MockLlm::new();
        let a = llm.query("plain prompt").await.unwrap();
        let b = llm.query("plain prompt").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(llm.calls(), 2);
    }
}
