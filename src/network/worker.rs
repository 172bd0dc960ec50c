use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{WebhookCommand, WebhookEvent};

use super::assistant::{ChatRequest, RemoteAssistant};

/// Background half of the app: turns UI commands into webhook calls.
///
/// Every command runs in its own task, so a slow reply never holds up the
/// next request and results reach the UI in completion order.
pub struct WebhookWorker {
    assistant: Arc<dyn RemoteAssistant>,
    event_sender: mpsc::Sender<WebhookEvent>,
    command_receiver: mpsc::Receiver<WebhookCommand>,
}

impl WebhookWorker {
    pub fn new(
        assistant: Arc<dyn RemoteAssistant>,
        event_sender: mpsc::Sender<WebhookEvent>,
        command_receiver: mpsc::Receiver<WebhookCommand>,
    ) -> Self {
        Self {
            assistant,
            event_sender,
            command_receiver,
        }
    }

    /// Runs until the UI drops its command sender.
    pub async fn run(mut self) {
        log::info!("Webhook worker started");

        while let Some(command) = self.command_receiver.recv().await {
            log::info!("Dispatching {} request", command.kind());
            let assistant = Arc::clone(&self.assistant);
            let event_sender = self.event_sender.clone();

            tokio::spawn(async move {
                let event = execute(assistant.as_ref(), command).await;
                if let Err(err) = event_sender.send(event).await {
                    log::warn!("Failed to notify UI about webhook result: {err}");
                }
            });
        }

        log::info!("Webhook worker stopped");
    }
}

/// Performs one command and maps the outcome to its event.
pub async fn execute(assistant: &dyn RemoteAssistant, command: WebhookCommand) -> WebhookEvent {
    match command {
        WebhookCommand::SendChat {
            session_id,
            email,
            name,
            message,
        } => {
            let request = ChatRequest {
                email,
                name,
                message,
            };
            let result = assistant.send_message(&request).await;
            if let Err(err) = &result {
                log::warn!("Error sending message: {err}");
            }
            WebhookEvent::ChatReplied { session_id, result }
        }
        WebhookCommand::RequestUnblock { session_id, email } => {
            let result = assistant.request_unblock(&email).await;
            if let Err(err) = &result {
                log::warn!("Unblock failed: {err}");
            }
            WebhookEvent::UnblockFinished { session_id, result }
        }
        WebhookCommand::ScheduleSession {
            session_id,
            email,
            date,
        } => {
            let result = assistant.schedule_session(&email, &date).await;
            if let Err(err) = &result {
                log::warn!("Scheduling failed: {err}");
            }
            WebhookEvent::ScheduleFinished { session_id, result }
        }
    }
}
