//! Test utilities for integration tests
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use axum::{Router, body::Body};
use mockito::{Mock, ServerGuard};

use tutor::api::AppState;
use tutor::api::app;
use tutor::core::AppConfig;

/// Creates a course directory under the system temp dir holding
/// `pdf_count` dummy chapter files. The directory name includes a
/// nanosecond timestamp to avoid collisions between tests.
pub fn course_dir(pdf_count: usize) -> PathBuf {
    let ts = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
        .to_string();
    let dir = env::temp_dir().join(format!("tutor-test-{}", ts));
    fs::create_dir_all(&dir).expect("Failed to create course directory");

    for i in 1..=pdf_count {
        fs::write(dir.join(format!("chapitre_{}.pdf", i)), b"%PDF-1.4 test").unwrap();
    }

    dir
}

pub fn test_config(gemini_api_url: &str, course_path: &str) -> AppConfig {
    AppConfig {
        course_path: course_path.to_string(),
        gemini_api_url: gemini_api_url.to_string(),
        gemini_api_key: String::from("test-api-key"),
        gemini_model: String::from("gemini-1.5-flash"),
        system_prompt: String::from("Tu es un assistant pédagogique."),
    }
}

/// Creates a test application router pointed at a mock Gemini server
/// and a local course directory.
pub fn test_app(gemini_api_url: &str, course_path: &str) -> Router {
    let config = test_config(gemini_api_url, course_path);
    app(Arc::new(AppState::new(config)))
}

/// Mock the file upload endpoint, expected to be hit exactly
/// `uploads` times.
pub async fn mock_uploads(server: &mut ServerGuard, uploads: usize) -> Mock {
    server
        .mock("POST", "/upload/v1beta/files?uploadType=media")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"file":{"name":"files/abc123","uri":"https://example.com/files/abc123","mimeType":"application/pdf"}}"#,
        )
        .expect(uploads)
        .create_async()
        .await
}

/// Mock the generateContent endpoint with a fixed reply.
pub async fn mock_reply(server: &mut ServerGuard, text: &str) -> Mock {
    let body = serde_json::json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}}
        ]
    });
    server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body was not utf-8")
}
