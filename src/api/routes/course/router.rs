//! Router for the course load status API

use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use super::public::{CourseState, CourseStatusResponse};
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Report the state of the one-time course load. Read-only; the
/// load itself is triggered by server startup or the first chat.
async fn course_status(State(state): State<SharedState>) -> axum::Json<CourseStatusResponse> {
    let status = if let Some(err) = state.load_error() {
        CourseStatusResponse {
            state: CourseState::Failed,
            detail: err.to_string(),
            documents: 0,
        }
    } else if let Some(documents) = state.documents() {
        CourseStatusResponse {
            state: CourseState::Ready,
            detail: "Course loaded".to_string(),
            documents: documents.len(),
        }
    } else {
        CourseStatusResponse {
            state: CourseState::Unloaded,
            detail: "Course not loaded yet".to_string(),
            documents: 0,
        }
    };

    axum::Json(status)
}

/// Create the course router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(course_status))
}
