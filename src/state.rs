//! Application state management

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::extract::{Extractor, PdfEngineProvider};
use crate::tasks::TaskGenerator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    extractor: Extractor,
    tasks: TaskGenerator,
}

impl AppState {
    /// Create a new application state
    ///
    /// Constructs the PDF engine provider here so the capability handle is
    /// a single explicit object for the whole process; the engine itself is
    /// acquired lazily on first PDF extraction.
    pub fn new(config: Config) -> Self {
        let pdf = PdfEngineProvider::lopdf(
            Duration::from_secs(config.extraction.pdf_acquire_timeout_secs),
            Duration::from_secs(config.extraction.pdf_parse_timeout_secs),
        );
        let extractor = Extractor::new(pdf);
        let tasks = TaskGenerator::new(
            &config.gemini.api_url,
            &config.gemini.model,
            &config.gemini.api_key,
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                extractor,
                tasks,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the extraction pipeline
    pub fn extractor(&self) -> &Extractor {
        &self.inner.extractor
    }

    /// Get the task generator
    pub fn task_generator(&self) -> &TaskGenerator {
        &self.inner.tasks
    }
}
