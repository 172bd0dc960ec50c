use eframe::egui;

#[derive(Default)]
pub struct InputActions {
    pub send: bool,
    pub open_schedule: bool,
}

/// Ô nhập tin nhắn. Enter luôn gửi; nút "Enviar" chỉ bật khi `send_enabled`.
pub fn render(ui: &mut egui::Ui, input_text: &mut String, send_enabled: bool) -> InputActions {
    let mut actions = InputActions::default();
    ui.horizontal(|ui| {
        if ui.button("📅").on_hover_text("Agendar").clicked() {
            actions.open_schedule = true;
        }

        let width = ui.available_width() - 80.0;
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Digite sua mensagem...")
                .desired_width(width),
        );
        if ui
            .add_enabled(send_enabled, egui::Button::new("Enviar"))
            .clicked()
        {
            actions.send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions.send = true;
            response.request_focus();
        }
    });

    actions
}
