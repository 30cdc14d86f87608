//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::session::Turn;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    // None when the session never became ready and no reply was
    // requested
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<Turn>,
}
