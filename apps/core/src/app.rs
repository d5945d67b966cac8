use std::time::Duration;

use eframe::egui;

use crate::session::controller::SessionHandle;
use crate::session::state::SessionState;
use crate::ui;

/// Top-level eframe application.
///
/// Renders the latest published session snapshot each frame and owns the
/// tokio runtime the controller and its request tasks run on.
pub struct InsightLexApp {
    handle: SessionHandle,
    /// Kept alive for the lifetime of the window.
    _runtime: tokio::runtime::Runtime,
    /// Text bound to the input widget. The widget is the source of truth
    /// while the user types; controller-side rewrites (history selection,
    /// clear) are adopted back into it.
    input_buffer: String,
    /// The snapshot input as of the last reconciliation, used to detect
    /// controller-side rewrites.
    synced_input: String,
}

impl InsightLexApp {
    pub fn new(handle: SessionHandle, runtime: tokio::runtime::Runtime) -> Self {
        Self {
            handle,
            _runtime: runtime,
            input_buffer: String::new(),
            synced_input: String::new(),
        }
    }

    fn reconcile_input(&mut self, state: &SessionState) {
        // Adopt controller-side rewrites (history selection, clear) without
        // clobbering keystrokes the controller has not echoed back yet.
        if state.input != self.synced_input && state.input != self.input_buffer {
            self.input_buffer = state.input.clone();
        }
        self.synced_input = state.input.clone();
    }
}

impl eframe::App for InsightLexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.handle.state();
        self.reconcile_input(&state);

        ui::header::show(ctx);
        ui::sidebar::show(ctx, &state, &self.handle);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui::input::show(ui, &state, &mut self.input_buffer, &self.handle);
                ui.add_space(8.0);

                if let Some(error) = &state.error {
                    ui.colored_label(egui::Color32::from_rgb(200, 100, 100), error);
                    ui.add_space(8.0);
                }

                match &state.result {
                    Some(result) if !state.is_analyzing() => {
                        ui::dashboard::show(ui, result);
                    }
                    _ => {
                        if !state.is_analyzing() && state.error.is_none() {
                            show_empty_state(ui);
                        }
                    }
                }
            });
        });

        // A request may resolve while no input event wakes the UI.
        if state.is_analyzing() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn show_empty_state(ui: &mut egui::Ui) {
    ui.add_space(60.0);
    ui.vertical_centered(|ui| {
        ui.weak(egui::RichText::new("Awaiting input for analysis").size(18.0));
        ui.weak("InsightLex is ready to process your text.");
    });
}
