use crate::domain::DomainError;

pub const DEFAULT_MODEL: &str = "claude-3-opus-20240229";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Validated settings for a hosted LLM provider.
///
/// Only obtainable through [`LlmConfig::new`] or [`LlmConfigBuilder::build`],
/// so every instance satisfies: non-blank key and model, `max_tokens > 0`,
/// `temperature` in `[0, 1]`, non-blank base URL and a positive timeout.
#[derive(Clone, PartialEq)]
pub struct LlmConfig {
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    base_url: String,
    timeout_secs: u64,
}

impl LlmConfig {
    /// Config with the default model, token limit, temperature and endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, DomainError> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> LlmConfigBuilder {
        LlmConfigBuilder {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfigBuilder {
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    base_url: String,
    timeout_secs: u64,
}

impl LlmConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> Result<LlmConfig, DomainError> {
        if self.api_key.trim().is_empty() {
            return Err(DomainError::invalid_config("api_key must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(DomainError::invalid_config("model must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(DomainError::invalid_config("max_tokens must be greater than 0"));
        }
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(DomainError::invalid_config(format!(
                "temperature must be between 0 and 1, got {}",
                self.temperature
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(DomainError::invalid_config("base_url must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(DomainError::invalid_config("timeout_secs must be greater than 0"));
        }

        Ok(LlmConfig {
            api_key: self.api_key,
            model: self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            base_url: self.base_url,
            timeout_secs: self.timeout_secs,
        })
    }
}
