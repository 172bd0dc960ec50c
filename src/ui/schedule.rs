use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::common::WebhookCommand;
use crate::network::AssistantError;

pub const SUCCESS_TEXT: &str = "Agendamento realizado com sucesso!";
pub const FAILURE_TEXT: &str = "Falha ao agendar. Tente novamente.";

/// How long the success notice stays up before the dialog closes itself.
pub const SUCCESS_DISPLAY: Duration = Duration::seconds(2);

const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Trạng thái của hộp thoại đặt lịch. Việc mở/đóng do `ChatSession` quyết định.
#[derive(Debug, Default)]
pub struct ScheduleDialog {
    pub date: String,
    loading: bool,
    status: ScheduleStatus,
    error_message: Option<String>,
    close_at: Option<DateTime<Utc>>,
}

impl ScheduleDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> ScheduleStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.date.is_empty()
    }

    /// `false` when the typed date is not in `YYYY-MM-DDTHH:MM` form.
    /// Only drives a hint; submission is not blocked by it.
    pub fn date_looks_valid(&self) -> bool {
        NaiveDateTime::parse_from_str(&self.date, DATETIME_LOCAL_FORMAT).is_ok()
    }

    pub fn submit(&mut self, session_id: Uuid, email: &str) -> Option<WebhookCommand> {
        if self.date.is_empty() {
            return None;
        }

        self.loading = true;
        self.status = ScheduleStatus::Idle;

        Some(WebhookCommand::ScheduleSession {
            session_id,
            email: email.to_string(),
            date: self.date.clone(),
        })
    }

    pub fn apply_result(&mut self, result: Result<(), AssistantError>, now: DateTime<Utc>) {
        match result {
            Ok(()) => {
                self.status = ScheduleStatus::Success;
                self.close_at = Some(now + SUCCESS_DISPLAY);
            }
            Err(err) => {
                log::debug!("Schedule request failed: {err}");
                self.status = ScheduleStatus::Error;
                self.error_message = Some(FAILURE_TEXT.to_string());
            }
        }
        self.loading = false;
    }

    /// Returns `true` once the success notice has been displayed long enough;
    /// the dialog is reset at that point and the caller should close it.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match self.close_at {
            Some(close_at) if now >= close_at => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Time left before the auto-close, for scheduling a repaint.
    pub fn pending_close(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.close_at.map(|close_at| close_at - now)
    }

    /// Discards any in-progress input.
    pub fn reset(&mut self) {
        self.date.clear();
        self.status = ScheduleStatus::Idle;
        self.error_message = None;
        self.close_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(date: &str) -> (ScheduleDialog, WebhookCommand) {
        let mut dialog = ScheduleDialog::new();
        dialog.date = date.to_string();
        let command = dialog.submit(Uuid::nil(), "ana@x.com").unwrap();
        (dialog, command)
    }

    #[test]
    fn empty_date_is_a_no_op() {
        let mut dialog = ScheduleDialog::new();
        assert_eq!(dialog.submit(Uuid::nil(), "ana@x.com"), None);
        assert!(!dialog.is_loading());
        assert!(!dialog.can_submit());
    }

    #[test]
    fn success_closes_after_display_delay() {
        let (mut dialog, command) = submitted("2025-01-01T10:00");
        assert_eq!(
            command,
            WebhookCommand::ScheduleSession {
                session_id: Uuid::nil(),
                email: "ana@x.com".to_string(),
                date: "2025-01-01T10:00".to_string(),
            }
        );
        assert!(dialog.is_loading());

        let now = Utc::now();
        dialog.apply_result(Ok(()), now);
        assert_eq!(dialog.status(), ScheduleStatus::Success);
        assert!(!dialog.is_loading());

        assert!(!dialog.tick(now + Duration::milliseconds(1999)));
        assert_eq!(dialog.date, "2025-01-01T10:00");

        assert!(dialog.tick(now + SUCCESS_DISPLAY));
        assert_eq!(dialog.date, "");
        assert_eq!(dialog.status(), ScheduleStatus::Idle);
        assert!(!dialog.tick(now + Duration::seconds(10)));
    }

    #[test]
    fn failure_keeps_input_for_retry() {
        let (mut dialog, _) = submitted("2025-01-01T10:00");
        let now = Utc::now();

        dialog.apply_result(Err(AssistantError::Status { status: 500 }), now);

        assert_eq!(dialog.status(), ScheduleStatus::Error);
        assert_eq!(dialog.error_message(), Some(FAILURE_TEXT));
        assert!(!dialog.is_loading());
        assert_eq!(dialog.date, "2025-01-01T10:00");
        assert!(!dialog.tick(now + Duration::seconds(10)));
        assert!(dialog.can_submit());
    }

    #[test]
    fn resubmitting_clears_previous_status() {
        let (mut dialog, _) = submitted("2025-01-01T10:00");
        dialog.apply_result(Err(AssistantError::Unavailable), Utc::now());

        dialog.submit(Uuid::nil(), "ana@x.com");

        assert_eq!(dialog.status(), ScheduleStatus::Idle);
        assert!(dialog.is_loading());
    }

    #[test]
    fn past_or_odd_dates_are_not_rejected() {
        let (dialog, _) = submitted("1999-12-31T23:59");
        assert!(dialog.date_looks_valid());

        let (dialog, _) = submitted("amanhã cedo");
        assert!(!dialog.date_looks_valid());
        assert!(dialog.is_loading());
    }
}
