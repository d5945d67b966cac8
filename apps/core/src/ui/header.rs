use eframe::egui;

/// Static branding bar with the online indicator.
pub fn show(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("InsightLex");
            ui.weak("deep linguistic analysis");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(egui::Color32::from_rgb(100, 200, 100), "● Online");
            });
        });
    });
}
