use std::env;

use crate::session::SYSTEM_PROMPT;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub course_path: String,
    pub gemini_api_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub system_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let course_path = env::var("TUTOR_COURSE_PATH").unwrap_or("./".to_string());
        let gemini_api_url = env::var("TUTOR_GEMINI_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let gemini_api_key =
            env::var("TUTOR_GEMINI_API_KEY").expect("Missing env var TUTOR_GEMINI_API_KEY");
        let gemini_model =
            env::var("TUTOR_GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());
        let system_prompt =
            env::var("TUTOR_SYSTEM_PROMPT").unwrap_or_else(|_| SYSTEM_PROMPT.to_string());

        Self {
            course_path,
            gemini_api_url,
            gemini_api_key,
            gemini_model,
            system_prompt,
        }
    }
}
