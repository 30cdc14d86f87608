//! Gemini file API client for uploading course documents

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Reference to a file held by the Gemini file API. The provider
/// assigns the name and URI; chat turns reference the file by URI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileHandle {
    pub name: String,
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

#[derive(Debug, Deserialize)]
struct UploadFileResponse {
    file: FileHandle,
}

/// Upload a local file via the media upload endpoint and return the
/// provider-assigned handle. Uploads are not retried.
pub async fn upload_file(
    api_url: &str,
    api_key: &str,
    path: &Path,
    mime_type: &str,
) -> Result<FileHandle> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("course document")
        .to_string();

    let url = format!(
        "{}/upload/v1beta/files?uploadType=media",
        api_url.trim_end_matches("/")
    );
    let response = reqwest::Client::new()
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", mime_type)
        .timeout(Duration::from_secs(60 * 5))
        .body(bytes)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!(
            "Upload of {} failed with {}: {}",
            file_name,
            status,
            body
        ));
    }

    let resp: UploadFileResponse = response.json().await?;
    Ok(resp.file)
}
