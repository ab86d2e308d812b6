use crate::domain::{Document, DomainError};

/// Converts an uploaded file into a [`Document`].
pub trait DocumentProcessor: Send + Sync {
    /// Extract the text of `bytes`, using `filename` to decide whether the
    /// file type is supported and which [`crate::domain::DocumentType`] it gets.
    ///
    /// Fails with [`DomainError::UnsupportedFileType`] for unknown extensions
    /// and [`DomainError::Decode`] when the bytes are not valid text.
    fn process(&self, bytes: &[u8], filename: &str) -> Result<Document, DomainError>;

    /// Lowercase extensions including the leading dot, in display order.
    fn supported_extensions(&self) -> &[&'static str];

    fn supports(&self, filename: &str) -> bool {
        let ext = extension_of(filename);
        self.supported_extensions().contains(&ext.as_str())
    }
}

/// The rejection message for a processor's extension set, e.g.
/// `Only .txt, .md files are supported`.
pub fn unsupported_type_message(extensions: &[&str]) -> String {
    format!("Only {} files are supported", extensions.join(", "))
}

/// Everything from the last `.` onward, lowercased. A name without a dot has
/// the empty extension.
pub fn extension_of(filename: &str) -> String {
    filename
        .rfind('.')
        .map(|i| filename[i..].to_lowercase())
        .unwrap_or_default()
}
