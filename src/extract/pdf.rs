//! PDF page walker
//!
//! Text extraction walks every page in ascending order, joins each page's
//! text items with single spaces and separates pages with a blank line.
//!
//! The parsing engine is an injectable capability: [`PdfEngineProvider`]
//! owns an acquisition closure and memoizes the resulting handle, so the
//! engine is acquired at most once per process. Concurrent first use
//! coalesces into a single acquisition shared by all waiters, and a failed
//! acquisition caches nothing — the next call retries.
//!
//! Unlike every other strategy, PDF extraction never surfaces an error:
//! any failure is folded into a sentinel string so the caller always gets
//! usable text back. Downstream consumers depend on this asymmetry.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::OnceCell;
use tokio::time::timeout;

/// Engine-level failure. Always folded into the sentinel by the walker.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("engine acquisition failed: {0}")]
    Acquisition(String),

    #[error("engine acquisition timed out after {0}s")]
    AcquisitionTimeout(u64),

    #[error("{0}")]
    Parse(String),

    #[error("parsing timed out after {0}s")]
    ParseTimeout(u64),

    #[error("task join error: {0}")]
    Join(String),
}

/// A PDF parsing capability.
///
/// `page_texts` returns the text items of every page, pages in ascending
/// 1-indexed order. Item segmentation is engine-defined; the walker only
/// promises to join items with single spaces.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    async fn page_texts(&self, bytes: &[u8]) -> Result<Vec<Vec<String>>, PdfError>;
}

/// Future returned by an engine acquisition closure
pub type AcquireFuture = Pin<Box<dyn Future<Output = Result<Arc<dyn PdfEngine>, PdfError>> + Send>>;

/// Lazily-acquired, process-wide PDF engine handle.
///
/// Constructed once at startup and carried in application state; replaces
/// ambient global lookup with an explicit service object.
pub struct PdfEngineProvider {
    acquire: Box<dyn Fn() -> AcquireFuture + Send + Sync>,
    engine: OnceCell<Arc<dyn PdfEngine>>,
    acquire_timeout: Duration,
    parse_timeout: Duration,
}

impl PdfEngineProvider {
    /// Create a provider with a custom acquisition strategy.
    pub fn new(
        acquire: impl Fn() -> AcquireFuture + Send + Sync + 'static,
        acquire_timeout: Duration,
        parse_timeout: Duration,
    ) -> Self {
        Self {
            acquire: Box::new(acquire),
            engine: OnceCell::new(),
            acquire_timeout,
            parse_timeout,
        }
    }

    /// Provider backed by the bundled lopdf engine.
    pub fn lopdf(acquire_timeout: Duration, parse_timeout: Duration) -> Self {
        Self::new(
            || Box::pin(async { Ok(Arc::new(LopdfEngine) as Arc<dyn PdfEngine>) }),
            acquire_timeout,
            parse_timeout,
        )
    }

    /// Get the engine, acquiring it on first use.
    ///
    /// `OnceCell` guarantees a single in-flight acquisition: late callers
    /// wait on the first one instead of starting their own fetch. On
    /// failure the cell stays empty and the next caller retries.
    async fn engine(&self) -> Result<Arc<dyn PdfEngine>, PdfError> {
        let engine = self
            .engine
            .get_or_try_init(|| async {
                tracing::debug!("acquiring PDF engine");
                timeout(self.acquire_timeout, (self.acquire)())
                    .await
                    .map_err(|_| PdfError::AcquisitionTimeout(self.acquire_timeout.as_secs()))?
            })
            .await?;
        Ok(engine.clone())
    }

    /// Extract the concatenated text of every page.
    ///
    /// Never fails: acquisition, load and parse errors all degrade to a
    /// sentinel string embedding the error message.
    pub async fn extract_text(&self, bytes: &[u8]) -> String {
        match self.try_extract(bytes).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("PDF extraction failed: {}", e);
                format!("[Could not extract text from PDF. Error: {}]", e)
            }
        }
    }

    async fn try_extract(&self, bytes: &[u8]) -> Result<String, PdfError> {
        let engine = self.engine().await?;

        let pages = timeout(self.parse_timeout, engine.page_texts(bytes))
            .await
            .map_err(|_| PdfError::ParseTimeout(self.parse_timeout.as_secs()))??;

        let mut full_text = String::new();
        for items in &pages {
            full_text.push_str(&items.join(" "));
            full_text.push_str("\n\n");
        }
        Ok(full_text.trim().to_string())
    }
}

/// Default engine backed by lopdf.
pub struct LopdfEngine;

#[async_trait]
impl PdfEngine for LopdfEngine {
    async fn page_texts(&self, bytes: &[u8]) -> Result<Vec<Vec<String>>, PdfError> {
        let bytes = bytes.to_vec();

        // PDF decoding is CPU-bound
        tokio::task::spawn_blocking(move || {
            let doc = lopdf::Document::load_mem(&bytes)
                .map_err(|e| PdfError::Parse(e.to_string()))?;

            let mut pages = Vec::new();
            // get_pages is keyed by 1-indexed page number, iterated ascending
            for (page_number, _) in doc.get_pages() {
                let page_text = doc
                    .extract_text(&[page_number])
                    .map_err(|e| PdfError::Parse(format!("page {}: {}", page_number, e)))?;
                let items: Vec<String> = page_text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                pages.push(items);
            }
            Ok(pages)
        })
        .await
        .map_err(|e| PdfError::Join(e.to_string()))?
    }
}
