use eframe::egui;

use crate::session::controller::SessionHandle;
use crate::session::reducer::SessionAction;
use crate::session::state::SessionState;

/// Input form: text entry, word/character counters, submit trigger.
pub fn show(
    ui: &mut egui::Ui,
    state: &SessionState,
    buffer: &mut String,
    handle: &SessionHandle,
) {
    ui.group(|ui| {
        ui.label(
            egui::RichText::new("SOURCE TEXT")
                .small()
                .strong()
                .color(ui.visuals().weak_text_color()),
        );

        let response = ui.add(
            egui::TextEdit::multiline(buffer)
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .hint_text("Paste your text here for deep linguistic analysis..."),
        );
        if response.changed() {
            handle.dispatch(SessionAction::InputChanged(buffer.clone()));
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if !state.input.is_empty() {
                ui.weak(format!(
                    "{} words • {} characters",
                    state.word_count(),
                    state.char_count()
                ));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if state.is_analyzing() {
                    ui.add_enabled(false, egui::Button::new("Analyzing with AI…"));
                    ui.spinner();
                } else if ui
                    .add_enabled(state.can_submit(), egui::Button::new("Run Analysis"))
                    .clicked()
                {
                    handle.dispatch(SessionAction::Submit);
                }
            });
        });
    });
}
