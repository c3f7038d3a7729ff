//! Developer task generation
//!
//! Turns extracted PRD text into a categorized task list via a
//! generative-language API, and packages the list for JSON download.

mod generator;
mod prompt;
mod types;

pub use generator::{parse_tasks, TaskGenerator};
pub use prompt::task_breakdown_prompt;
pub use types::{Task, TaskCategory, TaskError, TaskExport};
