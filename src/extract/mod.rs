//! Multi-format text extraction
//!
//! Normalizes heterogeneous uploaded documents into a single plain-text
//! string suitable for prompting.
//!
//! # Dispatch
//!
//! Classification is by declared media type and file-name extension only —
//! never by content. The ordered rules live in [`Strategy::classify`]:
//!
//! | Input | Strategy |
//! |-------|----------|
//! | `text/plain` | passthrough |
//! | `application/pdf`, `.pdf` | PDF page walker |
//! | OOXML / `application/msword`, `.docx` / `.doc` | Office raw text |
//! | `application/rtf`, `.rtf` | passthrough (markup kept verbatim) |
//! | `text/html`, `.html` / `.htm` | tag strip |
//! | `text/csv`, `application/json`, `text/markdown`, `application/xml` and their extensions | passthrough |
//! | anything else | `UnsupportedFormat` |
//!
//! # Failure model
//!
//! Passthrough, Office and HTML strategies propagate [`ExtractError`]s.
//! The PDF strategy alone degrades to a sentinel string embedding the
//! failure, so a recognized `.pdf` always produces text.

mod document;
mod error;

pub mod html;
pub mod pdf;
pub mod text;
pub mod word;

pub use document::{SourceDocument, Strategy, MEDIA_TYPE_DOCX};
pub use error::{ExtractError, Result};
pub use pdf::{LopdfEngine, PdfEngine, PdfEngineProvider};

/// Format dispatcher over the strategy implementations.
///
/// Holds the lazily-acquired PDF engine; everything else is stateless.
pub struct Extractor {
    pdf: PdfEngineProvider,
}

impl Extractor {
    pub fn new(pdf: PdfEngineProvider) -> Self {
        Self { pdf }
    }

    /// Extract plain text from a document.
    ///
    /// Classifies by the ordered dispatch table and runs the matching
    /// strategy. Fails with `UnsupportedFormat` naming the declared type
    /// when nothing matches.
    pub async fn extract(&self, doc: &SourceDocument) -> Result<String> {
        let strategy = Strategy::classify(doc.media_type(), doc.name()).ok_or_else(|| {
            ExtractError::UnsupportedFormat(doc.media_type().to_string())
        })?;

        tracing::debug!(
            name = %doc.name(),
            media_type = %doc.media_type(),
            size_bytes = doc.size_bytes(),
            strategy = ?strategy,
            "extracting document"
        );

        match strategy {
            Strategy::PlainText => Ok(text::read_as_text(doc)),
            Strategy::Pdf => Ok(self.pdf.extract_text(doc.bytes()).await),
            Strategy::Word => {
                // ZIP inflate + XML walk is CPU-bound
                let bytes = doc.bytes().to_vec();
                tokio::task::spawn_blocking(move || word::extract_raw_text(&bytes))
                    .await
                    .map_err(|e| {
                        ExtractError::ConversionFailure(format!("task join error: {}", e))
                    })?
            }
            Strategy::Html => Ok(html::strip_tags(&text::read_as_text(doc))),
        }
    }
}
