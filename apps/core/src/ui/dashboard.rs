use eframe::egui;

use crate::models::AnalysisResult;

use super::sentiment_color;

/// Result dashboard: summary, sentiment gauge, tone/intent panel,
/// readability, entity chart, key-phrase tags and the language tag.
pub fn show(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.group(|ui| {
        ui.heading("Summary");
        ui.label(&result.summary);
        ui.add_space(2.0);
        ui.weak(format!("Detected language: {}", result.language));
    });
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.heading("Sentiment");
        let sentiment = &result.sentiment;
        ui.add(
            egui::ProgressBar::new(sentiment.score as f32)
                .fill(sentiment_color(sentiment.label))
                .text(format!(
                    "{} — {:.0}%",
                    sentiment.label.as_str(),
                    sentiment.score * 100.0
                )),
        );
        ui.label(&sentiment.explanation);
    });
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.heading("Tone & Intent");
        ui.horizontal(|ui| {
            ui.label(format!("{} / {}", result.tone.primary, result.tone.secondary));
            ui.separator();
            ui.label(&result.intent);
        });
        ui.add(
            egui::ProgressBar::new((result.tone.formality_score / 100.0) as f32)
                .text(format!("Formality {:.0}/100", result.tone.formality_score)),
        );
    });
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.heading("Readability");
        ui.label(format!(
            "Score {:.0} — {}",
            result.readability.score, result.readability.level
        ));
        for suggestion in &result.readability.suggestions {
            ui.label(format!("• {}", suggestion));
        }
    });
    ui.add_space(8.0);

    if !result.entities.is_empty() {
        ui.group(|ui| {
            ui.heading("Entities");
            show_entity_chart(ui, result);
            ui.horizontal_wrapped(|ui| {
                for entity in &result.entities {
                    ui.weak(format!("{} ({})", entity.name, entity.kind));
                }
            });
        });
        ui.add_space(8.0);
    }

    if !result.keyphrases.is_empty() {
        ui.group(|ui| {
            ui.heading("Key Phrases");
            ui.horizontal_wrapped(|ui| {
                for phrase in &result.keyphrases {
                    ui.label(
                        egui::RichText::new(phrase)
                            .background_color(ui.visuals().faint_bg_color),
                    );
                }
            });
        });
    }
}

/// One bar per entity, scaled by its relevance weight.
fn show_entity_chart(ui: &mut egui::Ui, result: &AnalysisResult) {
    let plot = egui_plot::Plot::new("entity_relevance")
        .height(160.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .include_y(0.0)
        .include_y(1.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = result
            .entities
            .iter()
            .enumerate()
            .map(|(i, entity)| {
                egui_plot::Bar::new(i as f64, entity.relevance)
                    .name(&entity.name)
                    .width(0.6)
                    .fill(egui::Color32::from_rgb(100, 150, 255))
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars));
    });
}
