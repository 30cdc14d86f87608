//! Narrow client for the Gemini REST API: media uploads to the file
//! API and single-completion generateContent requests.

pub mod chat;
pub mod files;

pub use chat::{Content, FileData, Part, Role, generate_content};
pub use files::{FileHandle, upload_file};
