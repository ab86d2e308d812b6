mod document;
mod llm_config;
mod message;

pub use document::*;
pub use llm_config::*;
pub use message::*;
