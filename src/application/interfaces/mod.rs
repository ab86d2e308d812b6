mod document_processor;
mod llm_api;

pub use document_processor::*;
pub use llm_api::*;
