//! Extraction error types
//!
//! One error enum for the whole pipeline. Every strategy except PDF
//! propagates these; the PDF walker degrades to a sentinel string instead
//! (see `extract::pdf`).

use thiserror::Error;

/// Extraction pipeline error
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No strategy matches the declared media type or file extension
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// Low-level I/O failure reading the source bytes
    #[error("Read failure: {0}")]
    ReadFailure(#[from] std::io::Error),

    /// A format-specific parser rejected the content
    #[error("Conversion failure: {0}")]
    ConversionFailure(String),
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
