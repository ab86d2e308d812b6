mod anthropic_llm;
mod mock_llm;
mod openai_llm;
mod text_processor;

pub use anthropic_llm::*;
pub use mock_llm::*;
pub use openai_llm::*;
pub use text_processor::*;
