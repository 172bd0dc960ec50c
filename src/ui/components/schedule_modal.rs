use eframe::egui;

use crate::ui::schedule::{FAILURE_TEXT, SUCCESS_TEXT, ScheduleDialog, ScheduleStatus};

#[derive(Default)]
pub struct ScheduleActions {
    pub submit: bool,
    pub close: bool,
}

pub fn render(ctx: &egui::Context, dialog: &mut ScheduleDialog) -> ScheduleActions {
    let mut actions = ScheduleActions::default();
    let mut open = true;

    egui::Window::new("📅 Agendar Sessão")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("Escolha o melhor horário para estudar.");
            ui.add(egui::TextEdit::singleline(&mut dialog.date).hint_text("AAAA-MM-DDTHH:MM"));
            if !dialog.date.is_empty() && !dialog.date_looks_valid() {
                ui.label(
                    egui::RichText::new("Formato esperado: 2025-01-01T10:00")
                        .small()
                        .weak(),
                );
            }

            match dialog.status() {
                ScheduleStatus::Success => {
                    ui.colored_label(egui::Color32::GREEN, SUCCESS_TEXT);
                }
                ScheduleStatus::Error => {
                    let message = dialog.error_message().unwrap_or(FAILURE_TEXT);
                    ui.colored_label(egui::Color32::RED, message);
                }
                ScheduleStatus::Idle => {}
            }

            ui.horizontal(|ui| {
                let label = if dialog.is_loading() {
                    "Agendando..."
                } else {
                    "Confirmar Agendamento"
                };
                if ui
                    .add_enabled(dialog.can_submit(), egui::Button::new(label))
                    .clicked()
                {
                    actions.submit = true;
                }
                if ui.button("Cancelar").clicked() {
                    actions.close = true;
                }
            });
        });

    if !open {
        actions.close = true;
    }
    actions
}
