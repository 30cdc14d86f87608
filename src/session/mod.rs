//! Chat session state: the visible transcript a user sees and the
//! hidden provider conversation seeded with the course documents.

mod prompt;

pub use prompt::{ACKNOWLEDGMENT, SYSTEM_PROMPT};

use serde::{Deserialize, Serialize};

use crate::core::AppConfig;
use crate::gemini::{Content, FileHandle, Role, generate_content};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum TurnRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// One visible entry in the conversation, in display order.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn new(role: TurnRole, text: &str) -> Self {
        Turn {
            role,
            text: text.to_string(),
        }
    }
}

/// The hidden provider-side conversation. The two seed turns are
/// built once at initialization and always precede visible turns;
/// they never appear in the transcript.
#[derive(Debug, Clone)]
struct ProviderChat {
    history: Vec<Content>,
}

impl ProviderChat {
    fn new(documents: &[FileHandle]) -> Self {
        let history = vec![
            Content::files(Role::User, documents),
            Content::text(Role::Model, ACKNOWLEDGMENT),
        ];
        Self { history }
    }

    /// One request/response cycle. The history only advances when
    /// the provider replies, so a failed call leaves the
    /// conversation where it was.
    async fn send(&mut self, config: &AppConfig, text: &str) -> anyhow::Result<String> {
        let mut contents = self.history.clone();
        contents.push(Content::text(Role::User, text));

        let reply = generate_content(
            &config.gemini_api_url,
            &config.gemini_api_key,
            &config.gemini_model,
            &config.system_prompt,
            &contents,
        )
        .await?;

        contents.push(Content::text(Role::Model, &reply));
        self.history = contents;
        Ok(reply)
    }
}

/// One user's conversation. The session owns its transcript and,
/// when initialization succeeded, the seeded provider conversation.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Vec<Turn>,
    provider: Option<ProviderChat>,
}

impl ChatSession {
    /// Build a session seeded with the uploaded course documents.
    /// `documents` must be non-empty; the caller surfaces the
    /// empty-course error before getting here.
    pub fn initialize(documents: &[FileHandle]) -> Self {
        Self {
            transcript: Vec::new(),
            provider: Some(ProviderChat::new(documents)),
        }
    }

    /// A session whose initialization never succeeded. Utterances
    /// are still recorded but produce no replies.
    pub fn unready() -> Self {
        Self {
            transcript: Vec::new(),
            provider: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.provider.is_some()
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Run one chat cycle for a user utterance. The user turn is
    /// always appended. When the provider conversation exists the
    /// reply (or an assistant-role error turn when the call fails)
    /// is appended and returned; otherwise no reply is produced.
    pub async fn send_message(&mut self, config: &AppConfig, text: &str) -> Option<String> {
        self.transcript.push(Turn::new(TurnRole::User, text));

        let provider = self.provider.as_mut()?;

        let reply = match provider.send(config, text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Chat request failed: {}", e);
                format!("Something went wrong: {}", e)
            }
        };
        self.transcript.push(Turn::new(TurnRole::Assistant, &reply));
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_documents() -> Vec<FileHandle> {
        vec![
            FileHandle {
                name: "files/chapitre1".to_string(),
                uri: "https://example.com/files/chapitre1".to_string(),
                mime_type: "application/pdf".to_string(),
            },
            FileHandle {
                name: "files/chapitre2".to_string(),
                uri: "https://example.com/files/chapitre2".to_string(),
                mime_type: "application/pdf".to_string(),
            },
        ]
    }

    fn test_config(api_url: &str) -> AppConfig {
        AppConfig {
            course_path: "./".to_string(),
            gemini_api_url: api_url.to_string(),
            gemini_api_key: "test-api-key".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
            system_prompt: "Tu es un assistant.".to_string(),
        }
    }

    #[test]
    fn it_seeds_documents_and_acknowledgment_before_any_visible_turn() {
        let session = ChatSession::initialize(&course_documents());
        let history = &session.provider.as_ref().unwrap().history;

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].parts.len(), 2);
        assert_eq!(history[1], Content::text(Role::Model, ACKNOWLEDGMENT));
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn it_appends_user_and_assistant_turns_in_order() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"L'arrêt Benjamin (CE, 1933) concerne la liberté de réunion."}]}}]}"#,
            )
            .create_async()
            .await;

        let config = test_config(&server.url());
        let mut session = ChatSession::initialize(&course_documents());

        let reply = session
            .send_message(&config, "Qu'est-ce que l'arrêt Benjamin ?")
            .await;

        assert_eq!(
            reply.as_deref(),
            Some("L'arrêt Benjamin (CE, 1933) concerne la liberté de réunion.")
        );
        assert_eq!(
            session.transcript(),
            &[
                Turn::new(TurnRole::User, "Qu'est-ce que l'arrêt Benjamin ?"),
                Turn::new(
                    TurnRole::Assistant,
                    "L'arrêt Benjamin (CE, 1933) concerne la liberté de réunion."
                ),
            ]
        );
    }

    #[tokio::test]
    async fn it_never_shows_seed_turns_in_the_transcript() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Bonjour !"}]}}]}"#,
            )
            .create_async()
            .await;

        let config = test_config(&server.url());
        let mut session = ChatSession::initialize(&course_documents());
        session.send_message(&config, "Bonjour").await;

        for turn in session.transcript() {
            assert_ne!(turn.text, ACKNOWLEDGMENT);
            assert!(!turn.text.contains("CONTEXTE ET RÔLE"));
        }
    }

    #[tokio::test]
    async fn it_surfaces_a_send_failure_as_an_assistant_turn() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let config = test_config(&server.url());
        let mut session = ChatSession::initialize(&course_documents());
        let reply = session.send_message(&config, "Bonjour").await.unwrap();

        assert!(reply.starts_with("Something went wrong"));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].role, TurnRole::Assistant);
        // The failed call must not leave a dangling user turn in the
        // hidden history
        assert_eq!(session.provider.as_ref().unwrap().history.len(), 2);
    }

    #[tokio::test]
    async fn it_records_utterances_without_replies_when_unready() {
        let config = test_config("http://localhost:1");
        let mut session = ChatSession::unready();

        let reply = session.send_message(&config, "Bonjour ?").await;

        assert!(reply.is_none());
        assert!(!session.is_ready());
        assert_eq!(
            session.transcript(),
            &[Turn::new(TurnRole::User, "Bonjour ?")]
        );
    }
}
