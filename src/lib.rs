pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    ChatSession, DocumentProcessor, LlmApi, TurnOutcome, CONFIGURE_LLM_MESSAGE,
    NO_DOCUMENT_NOTICE,
};

pub use connector::{
    AnthropicLlm, Container, LlmSettings, MockLlm, OpenAiLlm, ProviderKind, TextProcessor,
};

pub use domain::{
    build_prompt, ChatMessage, Document, DocumentType, DomainError, LlmConfig, Role, Transcript,
};
