use chrono::Local;
use eframe::egui;

use crate::common::{ChatMessage, Sender};

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage], typing: bool) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                render_message(ui, message);
                ui.add_space(6.0);
            }

            // Không lưu vào log, chỉ hiển thị khi đang chờ bot.
            if typing {
                ui.label(egui::RichText::new("Tri está digitando...").weak().italics());
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M").to_string();

    match message.sender {
        Sender::System => {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(&message.text).small().weak());
            });
        }
        Sender::Bot => {
            ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
                bubble(ui, "Tri", &message.text, &time);
            });
        }
        Sender::User => {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                bubble(ui, "Você", &message.text, &time);
            });
        }
    }
}

fn bubble(ui: &mut egui::Ui, author: &str, text: &str, time: &str) {
    let max_width = ui.available_width() * 0.8;
    ui.group(|ui| {
        ui.set_max_width(max_width);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(author).strong().small());
            ui.label(text);
            ui.label(egui::RichText::new(time).small().weak());
        });
    });
}
