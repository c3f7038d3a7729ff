//! Route-level tests for the extraction and task endpoints
//!
//! Drives the full router with tower `oneshot` and hand-built multipart
//! bodies, so the dispatch behavior is exercised exactly as a browser
//! upload would hit it.

use std::io::Write;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use neurotask_server::config::Config;
use neurotask_server::routes;
use neurotask_server::state::AppState;

const BOUNDARY: &str = "neurotask-test-boundary";

fn app() -> axum::Router {
    routes::app(AppState::new(Config::default()))
}

/// Build a single-field multipart body. `content_type: None` leaves the
/// part without a declared type, like a browser upload of an unknown file.
fn multipart_body(file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    if let Some(ct) = content_type {
        body.extend_from_slice(format!("Content-Type: {}\r\n", ct).as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn extract_request(file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/extract")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(file_name, content_type, bytes)))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn json_upload_extracts_verbatim() {
    let response = app()
        .oneshot(extract_request(
            "data.json",
            Some("application/json"),
            br#"{"a":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["text"], r#"{"a":1}"#);
    assert_eq!(json["fileName"], "data.json");
    assert_eq!(json["characters"], 7);
}

#[tokio::test]
async fn html_upload_strips_markup() {
    let response = app()
        .oneshot(extract_request(
            "page.html",
            Some("text/html"),
            b"<div>Hello <b>World</b></div>",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["text"], "Hello World");
}

#[tokio::test]
async fn docx_routes_by_extension_despite_generic_type() {
    let mut buffer = Vec::new();
    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let mut zip = zip::ZipWriter::new(cursor);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(
            br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body><w:p><w:r><w:t>Hello from Word</w:t></w:r></w:p></w:body>
</w:document>"#,
        )
        .unwrap();
        zip.finish().unwrap();
    }

    let response = app()
        .oneshot(extract_request(
            "spec.docx",
            Some("application/octet-stream"),
            &buffer,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["text"], "Hello from Word");
}

#[tokio::test]
async fn corrupted_pdf_soft_fails_with_sentinel() {
    let response = app()
        .oneshot(extract_request("broken.pdf", None, b"not really a pdf"))
        .await
        .unwrap();

    // Soft fail: a recognized .pdf always returns usable text
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["text"]
        .as_str()
        .unwrap()
        .contains("Could not extract text from PDF"));
}

#[tokio::test]
async fn unsupported_type_returns_415_with_declared_type() {
    let response = app()
        .oneshot(extract_request("clip.mp4", Some("video/mp4"), &[0, 1, 2]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = body_json(response).await;
    assert_eq!(json["error"], "unsupported_format");
    assert!(json["message"].as_str().unwrap().contains("video/mp4"));
}

#[tokio::test]
async fn misclassified_word_binary_returns_422() {
    let response = app()
        .oneshot(extract_request("notes.doc", None, b"plain text in disguise"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "conversion_failure");
}

#[tokio::test]
async fn missing_file_field_is_bad_request() {
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nx\r\n--{b}--\r\n",
        b = BOUNDARY
    );
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/extract")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_rejects_empty_text() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/tasks/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"text":"   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_serves_tasks_json_attachment() {
    let payload = r#"{"tasks":[
        {"id":1,"heading":"Wire schema","description":"Add the table","category":"backend","completed":true}
    ]}"#;

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/tasks/export")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap(),
        "attachment; filename=\"tasks.json\""
    );

    let json = body_json(response).await;
    assert_eq!(json["tasks"][0]["heading"], "Wire schema");
    assert_eq!(json["tasks"][0]["completed"], true);
    assert!(json["generatedAt"].is_string());
}
