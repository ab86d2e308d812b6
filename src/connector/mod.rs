//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Document processing (plain text and markdown)
//! - LLM providers (Anthropic Messages API, OpenAI placeholder, offline mock)
//! - The container wiring them into chat sessions

pub mod adapter;
mod container;

pub use adapter::*;
pub use container::*;
