use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::LlmApi;
use crate::domain::{DomainError, LlmConfig};

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// [`LlmApi`] over the Anthropic Messages API.
///
/// Each query sends a single user-role message and returns the first text
/// block of the reply. Transport errors, non-success statuses and unreadable
/// bodies all surface as [`DomainError::QueryFailed`].
pub struct AnthropicLlm {
    client: reqwest::Client,
    config: LlmConfig,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
}

impl AnthropicLlm {
    pub fn new(config: LlmConfig) -> Self {
        let url = format!("{}{}", config.base_url().trim_end_matches('/'), MESSAGES_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs()))
                .build()
                .unwrap_or_default(),
            config,
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ApiRequest<'a> {
        ApiRequest {
            model: self.config.model(),
            max_tokens: self.config.max_tokens(),
            temperature: self.config.temperature(),
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        }
    }

    /// Prefer the provider's own `error.message`; fall back to the raw body.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.trim().to_string())
    }

    fn first_text(response: ApiResponse) -> Option<String> {
        response
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .find_map(|block| block.text)
    }
}

fn failure(msg: impl std::fmt::Display) -> DomainError {
    DomainError::query_failed(format!("Failed to query Anthropic API: {msg}"))
}

#[async_trait]
impl LlmApi for AnthropicLlm {
    async fn query(&self, prompt: &str) -> Result<String, DomainError> {
        debug!("AnthropicLlm: POST {} (model {})", self.url, self.config.model());

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&self.request(prompt))
            .send()
            .await
            .map_err(failure)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("AnthropicLlm: API returned {status}: {body}");
            let detail = Self::error_message(&body);
            return Err(if detail.is_empty() {
                failure(format!("API returned {status}"))
            } else {
                failure(format!("API returned {status}: {detail}"))
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| failure(format!("could not parse response: {e}")))?;

        Self::first_text(api_response)
            .ok_or_else(|| failure("response contained no text content"))
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llm() -> AnthropicLlm {
        let config = LlmConfig::builder("sk-test")
            .model("claude-test")
            .max_tokens(64)
            .temperature(0.2)
            .base_url("http://localhost:9999/")
            .build()
            .unwrap();
        AnthropicLlm::new(config)
    }

    #[test]
    fn url_joins_base_and_messages_path() {
        assert_eq!(llm().url(), "http://localhost:9999/v1/messages");
    }

    #[test]
    fn request_carries_config_and_single_user_message() {
        let llm = llm();
        let json = serde_json::to_value(llm.request("hello")).unwrap();
        assert_eq!(json["model"], "claude-test");
        assert_eq!(json["max_tokens"], 64);
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn error_message_prefers_provider_message() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        assert_eq!(AnthropicLlm::error_message(body), "invalid x-api-key");
        assert_eq!(AnthropicLlm::error_message(" bad gateway \n"), "bad gateway");
    }

    #[test]
    fn first_text_skips_non_text_blocks() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"answer"},{"type":"text","text":"more"}]}"#,
        )
        .unwrap();
        assert_eq!(AnthropicLlm::first_text(response).as_deref(), Some("answer"));
    }

    #[test]
    fn first_text_is_none_for_empty_content() {
        let response: ApiResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(AnthropicLlm::first_text(response).is_none());
    }
}
