use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::{ChatMessage, Identity, WebhookCommand, WebhookEvent};
use crate::network::AssistantError;

use super::schedule::ScheduleDialog;

pub const BLOCK_KEYWORD: &str = "bloqueado";
pub const BLOCKED_NOTICE: &str = "Sua conta foi temporariamente bloqueada.";
pub const SEND_FAILED_NOTICE: &str =
    "Desculpe, não consegui processar sua mensagem. Tente novamente.";
pub const UNBLOCKED_NOTICE: &str = "Sua conta foi desbloqueada! Você pode voltar a conversar.";
pub const UNBLOCK_FAILED_NOTICE: &str = "Erro ao desbloquear. Tente novamente mais tarde.";

pub fn greeting(name: &str) -> String {
    format!("Olá, {name}! Sou o Tri. Como posso ajudar você hoje?")
}

/// A bot reply announces a block when it mentions "bloqueado" in any case.
pub fn is_block_reply(reply: &str) -> bool {
    reply.to_lowercase().contains(BLOCK_KEYWORD)
}

/// Một phiên chat của người dùng đã đăng nhập.
///
/// Log tin nhắn chỉ được nối thêm, theo đúng thứ tự các handler hoàn tất.
/// Các handler không gọi mạng trực tiếp: chúng trả về `WebhookCommand` để
/// app chuyển cho worker, và kết quả quay lại qua `apply_event`.
pub struct ChatSession {
    id: Uuid,
    identity: Identity,
    messages: Vec<ChatMessage>,
    pub input_text: String,
    is_blocked: bool,
    is_loading: bool,
    is_modal_open: bool,
    pub schedule: ScheduleDialog,
}

impl ChatSession {
    pub fn new(identity: Identity) -> Self {
        let messages = vec![ChatMessage::bot(greeting(&identity.name))];
        Self {
            id: Uuid::new_v4(),
            identity,
            messages,
            input_text: String::new(),
            is_blocked: false,
            is_loading: false,
            is_modal_open: false,
            schedule: ScheduleDialog::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    #[cfg(test)]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_blocked(&self) -> bool {
        self.is_blocked
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_modal_open(&self) -> bool {
        self.is_modal_open
    }

    /// The "typing" bubble is rendered after the log, never stored in it.
    pub fn shows_typing_indicator(&self) -> bool {
        self.is_loading && !self.is_blocked
    }

    /// State of the send button; Enter in the input bypasses the loading check.
    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_loading
    }

    /// Sends whatever is currently typed in the input.
    pub fn send_input(&mut self) -> Option<WebhookCommand> {
        let text = self.input_text.clone();
        self.send(text)
    }

    /// Appends the user's message and returns the chat request to dispatch.
    ///
    /// No-op for blank text or while blocked. The message is never rolled
    /// back, even if the request fails.
    pub fn send(&mut self, text: String) -> Option<WebhookCommand> {
        if text.trim().is_empty() || self.is_blocked {
            return None;
        }

        self.messages.push(ChatMessage::user(text.clone()));
        self.input_text.clear();
        self.is_loading = true;

        Some(WebhookCommand::SendChat {
            session_id: self.id,
            email: self.identity.email.clone(),
            name: self.identity.name.clone(),
            message: text,
        })
    }

    pub fn apply_chat_reply(&mut self, result: Result<String, AssistantError>) {
        match result {
            Ok(reply) if is_block_reply(&reply) => {
                log::info!("Bot reply flagged the account as blocked");
                self.is_blocked = true;
                self.messages.push(ChatMessage::bot(reply));
                self.messages.push(ChatMessage::system(BLOCKED_NOTICE));
            }
            Ok(reply) => self.messages.push(ChatMessage::bot(reply)),
            Err(_) => self.messages.push(ChatMessage::system(SEND_FAILED_NOTICE)),
        }
        self.is_loading = false;
    }

    pub fn unblock(&mut self) -> WebhookCommand {
        self.is_loading = true;
        WebhookCommand::RequestUnblock {
            session_id: self.id,
            email: self.identity.email.clone(),
        }
    }

    pub fn apply_unblock_result(&mut self, result: Result<(), AssistantError>) {
        match result {
            Ok(()) => {
                self.is_blocked = false;
                self.messages.push(ChatMessage::system(UNBLOCKED_NOTICE));
            }
            Err(_) => self.messages.push(ChatMessage::system(UNBLOCK_FAILED_NOTICE)),
        }
        self.is_loading = false;
    }

    pub fn open_schedule(&mut self) {
        self.is_modal_open = true;
    }

    pub fn close_schedule(&mut self) {
        self.is_modal_open = false;
        self.schedule.reset();
    }

    pub fn submit_schedule(&mut self) -> Option<WebhookCommand> {
        self.schedule.submit(self.id, &self.identity.email)
    }

    /// Routes a worker result to the matching handler.
    pub fn apply_event(&mut self, event: WebhookEvent, now: DateTime<Utc>) {
        match event {
            WebhookEvent::ChatReplied { result, .. } => self.apply_chat_reply(result),
            WebhookEvent::UnblockFinished { result, .. } => self.apply_unblock_result(result),
            WebhookEvent::ScheduleFinished { result, .. } => {
                self.schedule.apply_result(result, now)
            }
        }
    }

    /// Advances time-driven state (the schedule dialog's auto-close).
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.schedule.tick(now) {
            self.is_modal_open = false;
        }
    }
}
