use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Failure of a single webhook call. Carried inside `WebhookEvent`, hence `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("webhook answered with status {status}")]
    Status { status: u16 },
    #[error("webhook worker unavailable")]
    Unavailable,
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AssistantError::Status {
                status: status.as_u16(),
            },
            None => AssistantError::Transport(err.to_string()),
        }
    }
}

/// Body of the chat webhook call: `{ email, nome, message }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub email: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub message: String,
}

/// The remote bot, seen as one client with three operations.
#[async_trait]
pub trait RemoteAssistant: Send + Sync {
    /// Returns the bot's reply text.
    async fn send_message(&self, request: &ChatRequest) -> Result<String, AssistantError>;
    async fn request_unblock(&self, email: &str) -> Result<(), AssistantError>;
    async fn schedule_session(&self, email: &str, date: &str) -> Result<(), AssistantError>;
}
