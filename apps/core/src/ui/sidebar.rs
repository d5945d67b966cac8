use chrono::Local;
use eframe::egui;

use crate::session::controller::SessionHandle;
use crate::session::reducer::SessionAction;
use crate::session::state::SessionState;

use super::sentiment_color;

const SNIPPET_CHARS: usize = 60;

/// History list: chronological entries with timestamp and sentiment badge,
/// selectable, bulk-clearable.
pub fn show(ctx: &egui::Context, state: &SessionState, handle: &SessionHandle) {
    egui::SidePanel::left("history_panel")
        .default_width(260.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("History");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clearable = !state.history.is_empty();
                    if ui.add_enabled(clearable, egui::Button::new("Clear")).clicked() {
                        handle.dispatch(SessionAction::ClearHistory);
                    }
                });
            });
            ui.separator();

            if state.history.is_empty() {
                ui.weak("No analyses yet.");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for item in &state.history {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(
                                sentiment_color(item.result.sentiment.label),
                                item.result.sentiment.label.as_str(),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(
                                        item.timestamp
                                            .with_timezone(&Local)
                                            .format("%H:%M")
                                            .to_string(),
                                    );
                                },
                            );
                        });
                        if ui.selectable_label(false, snippet(&item.text)).clicked() {
                            handle.dispatch(SessionAction::SelectHistory(item.id));
                        }
                    });
                    ui.add_space(4.0);
                }
            });
        });
}

fn snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_CHARS {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(SNIPPET_CHARS).collect();
        short.push('…');
        short
    }
}
