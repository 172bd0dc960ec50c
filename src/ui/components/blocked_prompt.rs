use eframe::egui;

/// Thay thế ô nhập khi tài khoản bị khóa. Trả về `true` khi người dùng xin mở khóa.
pub fn render(ui: &mut egui::Ui) -> bool {
    let mut unblock = false;
    ui.vertical_centered(|ui| {
        ui.colored_label(egui::Color32::RED, "🔒 Chat Bloqueado");
        ui.label(egui::RichText::new("Ops! Você está na lista de bloqueio.").weak());
        if ui.button("🔓 Solicitar Desbloqueio").clicked() {
            unblock = true;
        }
    });
    unblock
}
