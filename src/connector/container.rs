use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatSession, DocumentProcessor, LlmApi};
use crate::connector::{AnthropicLlm, MockLlm, OpenAiLlm, TextProcessor};
use crate::domain::{
    DomainError, LlmConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};

/// Which hosted provider a session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Anthropic,
    /// Placeholder; every query fails as not implemented.
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
        }
    }
}

/// Raw provider settings as collected by the entry point.
///
/// Unlike [`LlmConfig`] these are not validated; validation happens when
/// [`Container::build_llm`] turns them into a provider.
#[derive(Clone)]
pub struct LlmSettings {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Use the offline [`MockLlm`] regardless of `provider`.
    pub mock: bool,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            mock: false,
        }
    }
}

impl LlmSettings {
    fn llm_config(&self, api_key: &str) -> Result<LlmConfig, DomainError> {
        LlmConfig::builder(api_key)
            .model(self.model.clone())
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .base_url(self.base_url.clone())
            .timeout_secs(self.timeout_secs)
            .build()
    }
}

/// Wires the document processor and the configured provider into sessions.
pub struct Container {
    processor: Arc<dyn DocumentProcessor>,
    settings: LlmSettings,
}

impl Container {
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            processor: Arc::new(TextProcessor::new()),
            settings,
        }
    }

    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    pub fn processor(&self) -> Arc<dyn DocumentProcessor> {
        self.processor.clone()
    }

    /// Build the provider described by the settings.
    ///
    /// Returns `Ok(None)` when the Anthropic provider is selected but no API
    /// key is set; sessions then answer with a configuration notice. Invalid
    /// settings fail here, not at query time.
    pub fn build_llm(&self) -> Result<Option<Arc<dyn LlmApi>>, DomainError> {
        if self.settings.mock {
            debug!("Using mock LLM provider");
            let llm: Arc<dyn LlmApi> = Arc::new(MockLlm::new());
            return Ok(Some(llm));
        }

        debug!("Selected provider: {}", self.settings.provider.as_str());
        match self.settings.provider {
            ProviderKind::OpenAi => {
                debug!("Using OpenAI placeholder provider");
                let llm: Arc<dyn LlmApi> = Arc::new(OpenAiLlm::new());
                Ok(Some(llm))
            }
            ProviderKind::Anthropic => {
                let Some(key) = self
                    .settings
                    .api_key
                    .as_deref()
                    .filter(|k| !k.trim().is_empty())
                else {
                    debug!("No API key configured; chat turns will prompt for one");
                    return Ok(None);
                };
                let config = self.settings.llm_config(key)?;
                debug!("Using Anthropic provider: {:?}", config);
                let llm: Arc<dyn LlmApi> = Arc::new(AnthropicLlm::new(config));
                Ok(Some(llm))
            }
        }
    }

    /// Replace the API key and return the provider built from it.
    ///
    /// Settings are only updated when the new key produces a valid provider.
    pub fn set_api_key(
        &mut self,
        api_key: impl Into<String>,
    ) -> Result<Option<Arc<dyn LlmApi>>, DomainError> {
        let previous = self.settings.api_key.replace(api_key.into());
        match self.build_llm() {
            Ok(llm) => Ok(llm),
            Err(e) => {
                self.settings.api_key = previous;
                Err(e)
            }
        }
    }

    pub fn chat_session(&self) -> Result<ChatSession, DomainError> {
        Ok(ChatSession::new(self.processor(), self.build_llm()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> LlmSettings {
        LlmSettings {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_provider_kind_matches_provider_name() {
        for kind in [ProviderKind::Anthropic, ProviderKind::OpenAi] {
            let container = Container::new(LlmSettings {
                provider: kind,
                ..settings()
            });
            let llm = container.build_llm().unwrap().unwrap();
            assert_eq!(llm.provider_name(), kind.as_str());
        }
    }

    #[test]
    fn test_anthropic_with_key_builds_provider() {
        let llm = Container::new(settings()).build_llm().unwrap().unwrap();
        assert_eq!(llm.provider_name(), "anthropic");
    }

    #[test]
    fn test_missing_or_blank_key_yields_no_provider() {
        let container = Container::new(LlmSettings::default());
        assert!(container.build_llm().unwrap().is_none());

        let blank = Container::new(LlmSettings {
            api_key: Some("  ".to_string()),
            ..Default::default()
        });
        assert!(blank.build_llm().unwrap().is_none());
    }

    #[test]
    fn test_invalid_settings_fail_at_construction() {
        let container = Container::new(LlmSettings {
            temperature: 1.5,
            ..settings()
        });
        let err = container.build_llm().err().unwrap();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_mock_overrides_provider() {
        let container = Container::new(LlmSettings {
            mock: true,
            provider: ProviderKind::OpenAi,
            ..Default::default()
        });
        let llm = container.build_llm().unwrap().unwrap();
        assert_eq!(llm.provider_name(), "mock");
    }

    #[test]
    fn test_openai_needs_no_key() {
        let container = Container::new(LlmSettings {
            provider: ProviderKind::OpenAi,
            ..Default::default()
        });
        let llm = container.build_llm().unwrap().unwrap();
        assert_eq!(llm.provider_name(), "openai");
    }

    #[test]
    fn test_set_api_key_reconfigures() {
        let mut container = Container::new(LlmSettings::default());
        let llm = container.set_api_key("sk-new").unwrap();
        assert!(llm.is_some());
        assert_eq!(container.settings().api_key.as_deref(), Some("sk-new"));
    }

    #[test]
    fn test_set_api_key_keeps_previous_on_invalid_settings() {
        let mut container = Container::new(LlmSettings {
            max_tokens: 0,
            ..Default::default()
        });
        assert!(container.set_api_key("sk-new").is_err());
        assert!(container.settings().api_key.is_none());
    }

    #[test]
    fn test_chat_session_starts_empty() {
        let session = Container::new(settings()).chat_session().unwrap();
        assert!(session.document().is_none());
        assert!(session.transcript().is_empty());
        assert_eq!(session.llm_name(), Some("anthropic"));
    }
}
