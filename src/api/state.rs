use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;

use crate::core::AppConfig;
use crate::course;
use crate::gemini::FileHandle;
use crate::session::ChatSession;

/// Sessions carry their own async mutex so one utterance is in
/// flight at a time per session, without blocking other sessions.
pub type SharedSession = Arc<tokio::sync::Mutex<ChatSession>>;

pub struct AppState {
    pub config: AppConfig,
    // The course is uploaded at most once per process. A failed load
    // is recorded in its own cell and stays failed until the process
    // restarts.
    documents: OnceCell<Vec<FileHandle>>,
    load_error: OnceCell<String>,
    // Never held across an await
    sessions: Mutex<HashMap<String, SharedSession>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            documents: OnceCell::new(),
            load_error: OnceCell::new(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The memoized course load. The first caller performs the
    /// uploads; concurrent callers wait on the same initialization
    /// and observe the same handle sequence. Errors are returned to
    /// every later caller without retrying.
    pub async fn course_documents(&self) -> Result<&[FileHandle], String> {
        if let Some(err) = self.load_error.get() {
            return Err(err.clone());
        }

        self.documents
            .get_or_try_init(|| async {
                // The cell re-runs waiting initializers when the
                // first attempt errors, so the error must be checked
                // and recorded inside the initializer to keep a
                // failed load terminal for callers racing it
                if let Some(err) = self.load_error.get() {
                    return Err(err.clone());
                }
                self.load_course().await.inspect_err(|e| {
                    let _ = self.load_error.set(e.clone());
                })
            })
            .await
            .map(|handles| handles.as_slice())
    }

    async fn load_course(&self) -> Result<Vec<FileHandle>, String> {
        let files =
            course::find_course_files(&self.config.course_path).map_err(|e| e.to_string())?;
        if files.is_empty() {
            return Err(format!(
                "No PDF files found in {}",
                self.config.course_path
            ));
        }
        course::upload_course(&self.config, &files)
            .await
            .map_err(|e| format!("Erreur de connexion : {}", e))
    }

    /// Course handles if the load already completed
    pub fn documents(&self) -> Option<&[FileHandle]> {
        self.documents.get().map(|d| d.as_slice())
    }

    /// The terminal load error, if the load failed
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.get().map(|e| e.as_str())
    }

    /// Get or create the session for this id. A new session is
    /// seeded from the memoized course documents; when the load has
    /// failed the session is created unready and utterances produce
    /// no replies.
    pub async fn session(&self, id: &str) -> SharedSession {
        if let Some(session) = self.find_session(id) {
            return session;
        }

        let session = match self.course_documents().await {
            Ok(documents) => ChatSession::initialize(documents),
            Err(e) => {
                tracing::error!("Session {} starts unready: {}", id, e);
                ChatSession::unready()
            }
        };

        Arc::clone(
            self.sessions
                .lock()
                .expect("Unable to lock sessions")
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(session))),
        )
    }

    pub fn find_session(&self, id: &str) -> Option<SharedSession> {
        self.sessions
            .lock()
            .expect("Unable to lock sessions")
            .get(id)
            .map(Arc::clone)
    }
}
