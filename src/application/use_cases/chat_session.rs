use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{unsupported_type_message, DocumentProcessor, LlmApi};
use crate::domain::{build_document_prompt, ChatMessage, Document, DomainError, Transcript};

/// Shown instead of running a turn when no document has been loaded.
pub const NO_DOCUMENT_NOTICE: &str = "Please upload a document before chatting!";

/// Assistant reply used when no provider is configured.
pub const CONFIGURE_LLM_MESSAGE: &str = "Please configure your API key to start chatting!";

/// Result of [`ChatSession::ask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// No document is loaded; nothing was recorded.
    NoDocument,
    /// The question was blank; nothing was recorded.
    Ignored,
    /// Both turns were appended; holds the assistant's content.
    Answered(String),
}

impl TurnOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }
}

/// One chat-over-document session.
///
/// Owns the loaded document, the transcript and the active provider. All
/// mutation goes through `&mut self` methods, so turns run strictly one after
/// another.
pub struct ChatSession {
    processor: Arc<dyn DocumentProcessor>,
    llm: Option<Arc<dyn LlmApi>>,
    document: Option<Document>,
    transcript: Transcript,
}

impl ChatSession {
    pub fn new(processor: Arc<dyn DocumentProcessor>, llm: Option<Arc<dyn LlmApi>>) -> Self {
        Self {
            processor,
            llm,
            document: None,
            transcript: Transcript::new(),
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    pub fn llm_name(&self) -> Option<&str> {
        self.llm.as_deref().map(|llm| llm.provider_name())
    }

    pub fn supported_extensions(&self) -> &[&'static str] {
        self.processor.supported_extensions()
    }

    /// Replace the active provider. Only later turns are affected.
    pub fn set_llm(&mut self, llm: Option<Arc<dyn LlmApi>>) {
        match llm.as_deref() {
            Some(llm) => info!("LLM provider set to {}", llm.provider_name()),
            None => info!("LLM provider cleared"),
        }
        self.llm = llm;
    }

    /// Process `bytes` and make the result the current document.
    ///
    /// On failure the previously loaded document, if any, stays in place.
    pub fn load_document(&mut self, bytes: &[u8], filename: &str) -> Result<&Document, DomainError> {
        let document = self.processor.process(bytes, filename)?;
        info!("Loaded document: {}", document.summary());
        Ok(&*self.document.insert(document))
    }

    /// Read a file from disk and load it. The extension is checked before the
    /// file is opened.
    pub async fn load_path(&mut self, path: impl AsRef<Path>) -> Result<&Document, DomainError> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        if !self.processor.supports(&filename) {
            return Err(DomainError::unsupported_file_type(unsupported_type_message(
                self.processor.supported_extensions(),
            )));
        }

        debug!("Reading {}", path.display());
        let bytes = tokio::fs::read(path).await?;
        self.load_document(&bytes, &filename)
    }

    /// Run one chat turn.
    ///
    /// Provider failures never escape: they become an `Error: <message>`
    /// assistant turn so the transcript shows what happened.
    pub async fn ask(&mut self, question: &str) -> TurnOutcome {
        let Some(document) = self.document.as_ref() else {
            debug!("Turn skipped: no document loaded");
            return TurnOutcome::NoDocument;
        };

        if question.trim().is_empty() {
            return TurnOutcome::Ignored;
        }

        self.transcript.push(ChatMessage::user(question));

        let reply = match self.llm.as_deref() {
            None => CONFIGURE_LLM_MESSAGE.to_string(),
            Some(llm) => {
                let prompt = build_document_prompt(document, question);
                debug!(
                    "Querying {} with a {}-byte prompt",
                    llm.provider_name(),
                    prompt.len()
                );
                match llm.query(&prompt).await {
                    Ok(response) => response,
                    Err(e) => {
                        warn!("Query to {} failed: {}", llm.provider_name(), e);
                        format!("Error: {e}")
                    }
                }
            }
        };

        self.transcript.push(ChatMessage::assistant(reply.clone()));
        TurnOutcome::Answered(reply)
    }

    /// Empty the transcript. The loaded document is kept.
    pub fn clear_transcript(&mut self) {
        info!("Clearing {} transcript entries", self.transcript.len());
        self.transcript.clear();
    }
}
