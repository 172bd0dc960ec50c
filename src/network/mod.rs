pub mod assistant;
pub mod webhook;
pub mod worker;

pub use assistant::{AssistantError, RemoteAssistant};
pub use webhook::WebhookClient;
pub use worker::WebhookWorker;
