use eframe::egui;

/// Returns `true` when "Sair" was clicked.
pub fn render(ui: &mut egui::Ui) -> bool {
    let mut logout = false;
    ui.horizontal(|ui| {
        ui.colored_label(egui::Color32::GREEN, "●");
        ui.heading("Trilingo");
        ui.label(egui::RichText::new("Online").weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Sair").clicked() {
                logout = true;
            }
        });
    });
    logout
}
