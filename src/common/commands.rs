use uuid::Uuid;

/// Lệnh UI gửi xuống webhook worker.
///
/// Mỗi lệnh mang `session_id` của phiên chat đã phát ra nó, để sự kiện trả về
/// có thể được định tuyến (hoặc bỏ qua nếu phiên đã kết thúc).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookCommand {
    SendChat {
        session_id: Uuid,
        email: String,
        name: String,
        message: String,
    },
    RequestUnblock {
        session_id: Uuid,
        email: String,
    },
    /// - date: chuỗi datetime-local, ví dụ `2025-01-01T10:00`
    ScheduleSession {
        session_id: Uuid,
        email: String,
        date: String,
    },
}

impl WebhookCommand {
    pub fn session_id(&self) -> Uuid {
        match self {
            WebhookCommand::SendChat { session_id, .. }
            | WebhookCommand::RequestUnblock { session_id, .. }
            | WebhookCommand::ScheduleSession { session_id, .. } => *session_id,
        }
    }

    /// Tên ngắn dùng cho log.
    pub fn kind(&self) -> &'static str {
        match self {
            WebhookCommand::SendChat { .. } => "chat",
            WebhookCommand::RequestUnblock { .. } => "unblock",
            WebhookCommand::ScheduleSession { .. } => "schedule",
        }
    }
}
