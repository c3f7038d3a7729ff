//! Task generation routes
//!
//! - POST /generate — PRD text → categorized developer task list
//! - POST /export — task list → `tasks.json` attachment

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::tasks::{Task, TaskExport};

/// Create the tasks router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_tasks))
        .route("/export", post(export_tasks))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub tasks: Vec<Task>,
}

/// POST /api/v1/tasks/generate
async fn generate_tasks(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest(
            "Please enter text or upload a file.".to_string(),
        ));
    }

    let tasks = state.task_generator().generate(text).await?;
    Ok(Json(GenerateResponse { tasks }))
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub tasks: Vec<Task>,
}

/// POST /api/v1/tasks/export
///
/// Pretty-prints the task list and serves it as a download.
async fn export_tasks(Json(request): Json<ExportRequest>) -> Result<impl IntoResponse> {
    let export = TaskExport::new(request.tasks);
    let body = serde_json::to_string_pretty(&export)
        .map_err(|e| AppError::Internal(format!("export serialization failed: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"tasks.json\"",
            ),
        ],
        body,
    ))
}
