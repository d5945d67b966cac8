//! Render-only dashboard widgets.
//!
//! Every panel reads one [`SessionState`](crate::session::state::SessionState)
//! snapshot per frame and feeds user intents back through the
//! [`SessionHandle`](crate::session::controller::SessionHandle); no widget
//! keeps domain state of its own.

pub mod dashboard;
pub mod header;
pub mod input;
pub mod sidebar;

use eframe::egui;

use crate::models::SentimentLabel;

/// Accent color shared by the sentiment gauge and the history badges.
pub fn sentiment_color(label: SentimentLabel) -> egui::Color32 {
    match label {
        SentimentLabel::Positive => egui::Color32::from_rgb(100, 200, 100),
        SentimentLabel::Negative => egui::Color32::from_rgb(200, 100, 100),
        SentimentLabel::Neutral => egui::Color32::from_rgb(150, 150, 160),
    }
}
