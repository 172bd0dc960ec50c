use eframe::egui;

use crate::ui::login::LoginForm;

/// Returns `true` when the form was submitted (button or Enter on e-mail).
pub fn render(ui: &mut egui::Ui, form: &mut LoginForm) -> bool {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading("Bem-vindo ao Trilingo");
        ui.label(egui::RichText::new("Entre para começar a aprender.").weak());
        ui.add_space(20.0);

        ui.label("Nome");
        ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Seu nome"));
        ui.add_space(8.0);

        ui.label("E-mail");
        let email = ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("seu@email.com"));
        ui.add_space(8.0);

        if let Some(error) = &form.error {
            ui.colored_label(egui::Color32::RED, error.as_str());
        }

        if ui.button("Entrar").clicked() {
            submit = true;
        }
        if email.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
    });

    submit
}
