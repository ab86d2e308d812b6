use crate::domain::Document;

/// Instruction appended after the question.
pub const ANSWER_INSTRUCTION: &str = "Please provide a response based on the context above.";

/// Builds the prompt sent to the provider for one chat turn.
///
/// The whole document is embedded first, then the question, then
/// [`ANSWER_INSTRUCTION`]. Both inputs are inserted verbatim.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!("Context: {context}\n\nQuestion: {question}\n\n{ANSWER_INSTRUCTION}")
}

pub fn build_document_prompt(document: &Document, question: &str) -> String {
    build_prompt(document.content(), question)
}
