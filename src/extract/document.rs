//! Source documents and format classification

use std::path::Path;

use super::error::Result;

/// OOXML word-processing media type
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// An uploaded document awaiting extraction.
///
/// Owned exclusively by the caller for the duration of one extraction call;
/// the pipeline never retains a reference after returning.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl SourceDocument {
    /// Create a document from in-memory content (e.g. a multipart field).
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a document from disk. The declared media type is left empty, so
    /// classification falls back to the file-name extension.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, "", bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// Extraction strategy selected for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Read the content verbatim as UTF-8 text
    PlainText,
    /// Walk PDF pages through the configured engine
    Pdf,
    /// Pull raw text out of an OOXML word-processing container
    Word,
    /// Strip markup and return the text content
    Html,
}

impl Strategy {
    /// Classify a document by declared media type and file-name extension.
    ///
    /// The rules are ordered and the first match wins; reordering them would
    /// change how ambiguous inputs route. There is no content sniffing: a
    /// mislabeled file is routed by its label and either fails downstream or
    /// produces garbage text.
    pub fn classify(media_type: &str, name: &str) -> Option<Self> {
        let name = name.to_lowercase();

        if media_type == "text/plain" {
            return Some(Self::PlainText);
        }
        if media_type == "application/pdf" || name.ends_with(".pdf") {
            return Some(Self::Pdf);
        }
        if media_type == MEDIA_TYPE_DOCX
            || media_type == "application/msword"
            || name.ends_with(".docx")
            || name.ends_with(".doc")
        {
            return Some(Self::Word);
        }
        // RTF control codes are not stripped; the raw markup is the text.
        if media_type == "application/rtf" || name.ends_with(".rtf") {
            return Some(Self::PlainText);
        }
        if media_type == "text/html" || name.ends_with(".html") || name.ends_with(".htm") {
            return Some(Self::Html);
        }
        if media_type == "text/csv" || name.ends_with(".csv") {
            return Some(Self::PlainText);
        }
        if media_type == "application/json" || name.ends_with(".json") {
            return Some(Self::PlainText);
        }
        if media_type == "text/markdown" || name.ends_with(".md") {
            return Some(Self::PlainText);
        }
        if media_type == "application/xml" || name.ends_with(".xml") {
            return Some(Self::PlainText);
        }

        None
    }
}
