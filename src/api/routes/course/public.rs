//! Public types for the course status API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum CourseState {
    Unloaded,
    Ready,
    Failed,
}

#[derive(Serialize, Deserialize)]
pub struct CourseStatusResponse {
    pub state: CourseState,
    pub detail: String,
    pub documents: usize,
}
