use uuid::Uuid;

use super::commands::WebhookCommand;
use crate::network::AssistantError;

/// Sự kiện từ webhook worker gửi lên UI. Mỗi lệnh sinh ra đúng một sự kiện.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    ChatReplied {
        session_id: Uuid,
        result: Result<String, AssistantError>,
    },
    UnblockFinished {
        session_id: Uuid,
        result: Result<(), AssistantError>,
    },
    ScheduleFinished {
        session_id: Uuid,
        result: Result<(), AssistantError>,
    },
}

impl WebhookEvent {
    /// Sự kiện thất bại tương ứng với một lệnh không thể thực hiện.
    pub fn failure_for(command: &WebhookCommand, error: AssistantError) -> Self {
        let session_id = command.session_id();
        match command {
            WebhookCommand::SendChat { .. } => WebhookEvent::ChatReplied {
                session_id,
                result: Err(error),
            },
            WebhookCommand::RequestUnblock { .. } => WebhookEvent::UnblockFinished {
                session_id,
                result: Err(error),
            },
            WebhookCommand::ScheduleSession { .. } => WebhookEvent::ScheduleFinished {
                session_id,
                result: Err(error),
            },
        }
    }

    pub fn session_id(&self) -> Uuid {
        match self {
            WebhookEvent::ChatReplied { session_id, .. }
            | WebhookEvent::UnblockFinished { session_id, .. }
            | WebhookEvent::ScheduleFinished { session_id, .. } => *session_id,
        }
    }
}
