pub mod api;
pub mod cli;
pub mod core;
pub mod course;
pub mod gemini;
pub mod session;
