//! Task types
//!
//! The task list shape produced by the generative model and consumed by
//! clients, plus the export payload for the downloadable JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Backend,
    Frontend,
    Testing,
}

/// A single developer task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub heading: String,
    pub description: String,
    pub category: TaskCategory,
    #[serde(default)]
    pub completed: bool,
}

/// Downloadable task-list export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskExport {
    pub generated_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
}

impl TaskExport {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            generated_at: Utc::now(),
            tasks,
        }
    }
}

/// Task generation error
#[derive(Debug, Error)]
pub enum TaskError {
    /// Transport or HTTP-level failure talking to the model endpoint
    #[error("API request failed: {0}")]
    Api(String),

    /// The response carried no candidate text
    #[error("API returned no usable response")]
    EmptyResponse,

    /// The candidate text was not a parseable task array
    #[error("could not parse generated tasks: {0}")]
    Malformed(String),
}
