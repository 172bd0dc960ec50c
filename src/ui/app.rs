use std::time::Duration;

use chrono::{DateTime, Utc};
use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{WebhookCommand, WebhookEvent};
use crate::network::AssistantError;

use super::components::{blocked_prompt, chat_area, header, input_bar, login_screen, schedule_modal};
use super::root::{RootController, Screen};
use super::session::ChatSession;

const IDLE_REPAINT: Duration = Duration::from_millis(250);

pub struct ChatApp {
    root: RootController,
    command_sender: mpsc::Sender<WebhookCommand>,
    event_receiver: mpsc::Receiver<WebhookEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        root: RootController,
        command_sender: mpsc::Sender<WebhookCommand>,
        event_receiver: mpsc::Receiver<WebhookEvent>,
    ) -> Self {
        Self::from_parts(root, command_sender, event_receiver)
    }

    fn from_parts(
        root: RootController,
        command_sender: mpsc::Sender<WebhookCommand>,
        event_receiver: mpsc::Receiver<WebhookEvent>,
    ) -> Self {
        Self {
            root,
            command_sender,
            event_receiver,
        }
    }

    fn handle_webhook_events(&mut self) {
        let now = Utc::now();
        while let Ok(event) = self.event_receiver.try_recv() {
            self.route_event(event, now);
        }
    }

    fn route_event(&mut self, event: WebhookEvent, now: DateTime<Utc>) {
        match self.root.session_mut() {
            Some(session) if session.id() == event.session_id() => session.apply_event(event, now),
            _ => log::debug!("Dropping {event:?}: its chat session is no longer mounted"),
        }
    }

    /// Hands a command to the worker. If it cannot be queued the matching
    /// failure is applied right away so the session never stays loading.
    fn dispatch(&mut self, command: WebhookCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to webhook worker: {err}");
            let event = WebhookEvent::failure_for(&err.into_inner(), AssistantError::Unavailable);
            self.route_event(event, Utc::now());
        }
    }
}

/// Draws the chat screen and collects the commands it produced.
/// Returns `true` when the user asked to log out.
fn render_chat(
    ctx: &egui::Context,
    session: &mut ChatSession,
    commands: &mut Vec<WebhookCommand>,
) -> bool {
    let mut logout = false;

    egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
        logout = header::render(ui);
    });

    egui::TopBottomPanel::bottom("chat_footer").show(ctx, |ui| {
        ui.add_space(6.0);
        if session.is_blocked() {
            if blocked_prompt::render(ui) {
                commands.push(session.unblock());
            }
        } else {
            let send_enabled = session.can_send();
            let actions = input_bar::render(ui, &mut session.input_text, send_enabled);
            if actions.open_schedule {
                session.open_schedule();
            }
            if actions.send {
                commands.extend(session.send_input());
            }
        }
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        chat_area::render(ui, session.messages(), session.shows_typing_indicator());
    });

    if session.is_modal_open() {
        let actions = schedule_modal::render(ctx, &mut session.schedule);
        if actions.submit {
            commands.extend(session.submit_schedule());
        }
        if actions.close {
            session.close_schedule();
        }
    }

    logout
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_webhook_events();

        let now = Utc::now();
        let mut commands = Vec::new();
        let mut submit_login = false;
        let mut logout = false;
        let mut repaint_after = IDLE_REPAINT;

        match self.root.screen_mut() {
            Screen::Login(form) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    submit_login = login_screen::render(ui, form);
                });
            }
            Screen::Chat(session) => {
                session.tick(now);
                if let Some(left) = session.schedule.pending_close(now) {
                    repaint_after = left.to_std().unwrap_or_default().min(IDLE_REPAINT);
                }
                logout = render_chat(ctx, session, &mut commands);
            }
        }

        if submit_login {
            self.root.submit_login();
        }
        for command in commands {
            self.dispatch(command);
        }
        if logout {
            self.root.logout();
        }

        // Kết quả webhook đến từ task nền, nên phải tự vẽ lại định kỳ.
        ctx.request_repaint_after(repaint_after);
    }
}
