use serde::{Deserialize, Serialize};

/// MIME-style tag describing how a document's text should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "text/plain")]
    PlainText,
    #[serde(rename = "text/markdown")]
    Markdown,
}

impl DocumentType {
    /// Maps a lowercased extension including its leading dot (e.g. `".md"`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".txt" => Some(DocumentType::PlainText),
            ".md" => Some(DocumentType::Markdown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::PlainText => "text/plain",
            DocumentType::Markdown => "text/markdown",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The extracted text and metadata of one loaded file.
///
/// Fields are private and there are no mutators: a session replaces the whole
/// value when a new file is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    content: String,
    name: String,
    #[serde(rename = "type")]
    doc_type: DocumentType,
}

impl Document {
    pub fn new(content: impl Into<String>, name: impl Into<String>, doc_type: DocumentType) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
            doc_type,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {} lines, {} bytes)",
            self.name,
            self.doc_type,
            self.line_count(),
            self.len()
        )
    }

    /// Name header, a rule, then the full content.
    pub fn preview(&self) -> String {
        format!("### {}\n---\n{}", self.name, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_from_extension() {
        assert_eq!(DocumentType::from_extension(".txt"), Some(DocumentType::PlainText));
        assert_eq!(DocumentType::from_extension(".md"), Some(DocumentType::Markdown));
        assert_eq!(DocumentType::from_extension(".pdf"), None);
        assert_eq!(DocumentType::from_extension(""), None);
    }

    #[test]
    fn test_document_serializes_type_tag() {
        let doc = Document::new("# Title", "notes.md", DocumentType::Markdown);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "text/markdown");
        assert_eq!(json["name"], "notes.md");
        assert_eq!(json["content"], "# Title");
    }

    #[test]
    fn test_document_preview_contains_name_and_content() {
        let doc = Document::new("line one\nline two", "a.txt", DocumentType::PlainText);
        let preview = doc.preview();
        assert!(preview.starts_with("### a.txt"));
        assert!(preview.ends_with("line one\nline two"));
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.summary(), "a.txt (text/plain, 2 lines, 17 bytes)");
    }
}
