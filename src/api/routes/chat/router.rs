//! Router for the chat API

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Run one request/response chat cycle for a session
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.message.trim().is_empty() {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            "Message must not be empty",
        )
            .into_response());
    }

    let session = state.session(&payload.session_id).await;
    let mut session = session.lock().await;
    let message = session.send_message(&state.config, &payload.message).await;

    Ok(axum::Json(public::ChatResponse { message }).into_response())
}

/// Get the visible transcript for a session
async fn chat_transcript(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(session) = state.find_session(&id) else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response());
    };

    let transcript = session.lock().await.transcript().to_vec();
    Ok(axum::Json(public::ChatTranscriptResponse { transcript }).into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{id}", get(chat_transcript))
}
