//! Wire types and client for generateContent requests

use std::time::Duration;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::files::FileHandle;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

/// A single part of a conversation turn. Text for regular chat
/// turns, file data for turns that carry uploaded documents.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    FileData {
        #[serde(rename = "fileData")]
        file_data: FileData,
    },
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FileData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "fileUri")]
    pub file_uri: String,
}

/// One turn of the provider conversation: a role plus ordered parts.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: Role, text: &str) -> Self {
        Content {
            role,
            parts: vec![Part::Text {
                text: text.to_string(),
            }],
        }
    }

    /// A turn carrying uploaded files by reference, in order.
    pub fn files(role: Role, files: &[FileHandle]) -> Self {
        Content {
            role,
            parts: files
                .iter()
                .map(|f| Part::FileData {
                    file_data: FileData {
                        mime_type: f.mime_type.clone(),
                        file_uri: f.uri.clone(),
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Run one completion against the model and return the reply text.
/// The full conversation history is sent on every call; the provider
/// holds no server-side chat state.
pub async fn generate_content(
    api_url: &str,
    api_key: &str,
    model: &str,
    system_instruction: &str,
    contents: &Vec<Content>,
) -> Result<String> {
    let payload = json!({
        "systemInstruction": {"parts": [{"text": system_instruction}]},
        "contents": contents,
    });
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        api_url.trim_end_matches("/"),
        model
    );
    let response = reqwest::Client::new()
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 5))
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!("Model request failed with {}: {}", status, body));
    }

    let resp: GenerateContentResponse = response.json().await?;
    let reply = resp
        .candidates
        .into_iter()
        .flatten()
        .next()
        .and_then(|c| {
            c.content.parts.into_iter().find_map(|p| match p {
                Part::Text { text } => Some(text),
                _ => None,
            })
        })
        .ok_or(anyhow!("No candidate text in model response"))?;

    Ok(reply)
}
