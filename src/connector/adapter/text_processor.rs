use tracing::debug;

use crate::application::{extension_of, unsupported_type_message, DocumentProcessor};
use crate::domain::{Document, DocumentType, DomainError};

const SUPPORTED_EXTENSIONS: &[&str] = &[".txt", ".md"];

/// [`DocumentProcessor`] for plain text and markdown files.
///
/// The extension check is case-insensitive and content must be valid UTF-8.
/// Bytes are kept verbatim, including any byte-order mark or trailing newline.
pub struct TextProcessor;

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for TextProcessor {
    fn process(&self, bytes: &[u8], filename: &str) -> Result<Document, DomainError> {
        let ext = extension_of(filename);
        let doc_type = DocumentType::from_extension(&ext).ok_or_else(|| {
            DomainError::unsupported_file_type(unsupported_type_message(SUPPORTED_EXTENSIONS))
        })?;

        let content = std::str::from_utf8(bytes).map_err(|e| {
            DomainError::decode(format!(
                "{filename} is not valid UTF-8 (at byte {})",
                e.valid_up_to()
            ))
        })?;

        debug!("Decoded {} bytes from {} as {}", bytes.len(), filename, doc_type);
        Ok(Document::new(content, filename, doc_type))
    }

    fn supported_extensions(&self) -> &[&'static str] {
        SUPPORTED_EXTENSIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_is_plain_text() {
        let doc = TextProcessor::new().process(b"hello", "hello.txt").unwrap();
        assert_eq!(doc.content(), "hello");
        assert_eq!(doc.name(), "hello.txt");
        assert_eq!(doc.doc_type(), DocumentType::PlainText);
    }

    #[test]
    fn test_md_is_markdown() {
        let doc = TextProcessor::new().process(b"# Title\n", "README.md").unwrap();
        assert_eq!(doc.content(), "# Title\n");
        assert_eq!(doc.doc_type(), DocumentType::Markdown);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let processor = TextProcessor::new();
        for (name, expected) in [
            ("A.TXT", DocumentType::PlainText),
            ("b.Txt", DocumentType::PlainText),
            ("C.MD", DocumentType::Markdown),
            ("d.mD", DocumentType::Markdown),
        ] {
            let doc = processor.process("ünïcødé".as_bytes(), name).unwrap();
            assert_eq!(doc.doc_type(), expected, "{name}");
            assert_eq!(doc.content(), "ünïcødé");
            assert_eq!(doc.name(), name);
        }
    }

    #[test]
    fn test_unsupported_extensions_are_rejected() {
        let processor = TextProcessor::new();
        for name in ["paper.pdf", "notes.markdown", "data.txt.bak", "README", "trailing.", ""] {
            let err = processor.process(b"text", name).unwrap_err();
            assert!(err.is_unsupported_file_type(), "{name}");
            assert_eq!(err.to_string(), "Only .txt, .md files are supported");
        }
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let err = TextProcessor::new()
            .process(&[b'o', b'k', 0xff, 0xfe], "binary.txt")
            .unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("binary.txt"));
        assert!(err.to_string().contains("byte 2"));
    }

    #[test]
    fn test_empty_file_is_accepted() {
        let doc = TextProcessor::new().process(b"", "empty.md").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_supports() {
        let processor = TextProcessor::new();
        assert!(processor.supports("x.MD"));
        assert!(!processor.supports("x.rs"));
        assert_eq!(processor.supported_extensions(), &[".txt", ".md"]);
    }
}
