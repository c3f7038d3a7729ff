//! Document extraction route
//!
//! POST / — multipart upload (`file` field) → extracted plain text.
//!
//! Error mapping follows the extraction taxonomy: an unrecognized declared
//! type is 415, a parser rejection is 422, an I/O failure is 500. A broken
//! PDF is none of these — it comes back 200 with the sentinel text, which
//! clients display like any other extraction result.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::extract::SourceDocument;
use crate::state::AppState;

/// Create the extract router
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(extract_document))
}

/// Extraction result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub file_name: String,
    pub size_bytes: usize,
    pub characters: usize,
    pub text: String,
}

/// POST /api/v1/extract
async fn extract_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let media_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        let max = state.config().extraction.max_upload_bytes;
        if bytes.len() > max {
            return Err(AppError::PayloadTooLarge {
                size: bytes.len(),
                max,
            });
        }

        let doc = SourceDocument::new(file_name.clone(), media_type, bytes.to_vec());
        let text = state.extractor().extract(&doc).await?;

        tracing::info!(
            file_name = %file_name,
            size_bytes = doc.size_bytes(),
            characters = text.chars().count(),
            "document extracted"
        );

        return Ok(Json(ExtractResponse {
            file_name,
            size_bytes: doc.size_bytes(),
            characters: text.chars().count(),
            text,
        }));
    }

    Err(AppError::BadRequest("missing 'file' field".to_string()))
}
