//! Course document discovery and one-time upload

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::AppConfig;
use crate::gemini::{FileHandle, upload_file};

pub const COURSE_MIME_TYPE: &str = "application/pdf";

/// Find all course PDFs in the given directory, sorted by path so
/// every load sees the same order.
pub fn find_course_files(dir: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read course directory {}", dir))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("pdf") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Upload every course file exactly once, collecting handles in
/// discovery order. A single failed upload aborts the whole load.
pub async fn upload_course(config: &AppConfig, files: &[PathBuf]) -> Result<Vec<FileHandle>> {
    tracing::info!("Loading {} course chapters", files.len());

    let mut handles = Vec::with_capacity(files.len());
    for path in files {
        tracing::debug!("Uploading {}", path.display());
        let handle = upload_file(
            &config.gemini_api_url,
            &config.gemini_api_key,
            path,
            COURSE_MIME_TYPE,
        )
        .await?;
        handles.push(handle);
    }

    tracing::info!("Course loaded");
    Ok(handles)
}
