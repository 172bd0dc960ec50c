pub mod commands;
pub mod events;
pub mod types;

pub use commands::WebhookCommand;
pub use events::WebhookEvent;
pub use types::{ChatMessage, Identity, Sender};
