//! Generative-language client
//!
//! One templated POST to the configured `generateContent` endpoint, no
//! retry, no backoff, no streaming. The endpoint, model and key all come
//! from configuration; nothing here is hardcoded to a vendor URL.

use serde_json::Value;

use super::prompt::task_breakdown_prompt;
use super::types::{Task, TaskError};

/// Task generator backed by a Gemini-style `generateContent` API.
pub struct TaskGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl TaskGenerator {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Generate a categorized task list from PRD text.
    pub async fn generate(&self, prd_text: &str) -> Result<Vec<Task>, TaskError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        );

        let request = serde_json::json!({
            "contents": [{
                "parts": [{ "text": task_breakdown_prompt(prd_text) }]
            }]
        });

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TaskError::Api(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaskError::Api(format!("HTTP {}: {}", status, body)));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| TaskError::Api(e.to_string()))?;

        let generated = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(TaskError::EmptyResponse)?;

        let tasks = parse_tasks(generated)?;
        tracing::info!(count = tasks.len(), model = %self.model, "generated task list");
        Ok(tasks)
    }
}

/// Parse the candidate text into a task array, tolerating Markdown fences.
pub fn parse_tasks(generated: &str) -> Result<Vec<Task>, TaskError> {
    let body = strip_fences(generated);
    serde_json::from_str(body).map_err(|e| TaskError::Malformed(e.to_string()))
}

/// Drop a surrounding ```` ```json ... ``` ```` fence, if present.
fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Opening fence may carry a language tag on the same line
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim_end()
}
