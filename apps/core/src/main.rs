// InsightLex Analysis Core entry point.

mod app;
mod client;
mod config;
mod error;
mod models;
mod session;
mod ui;

#[cfg(test)]
mod tests;

use anyhow::anyhow;
use tracing::info;
use tracing_subscriber::EnvFilter;

use client::GeminiClient;
use config::AppConfig;
use session::controller::SessionHandle;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("insightlex_core=info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(model = %config.model, "starting InsightLex");

    // The controller and its request tasks live on this runtime; the UI
    // runs on the main thread and talks to them through the handle.
    let runtime = tokio::runtime::Runtime::new()?;
    let handle = {
        let _guard = runtime.enter();
        SessionHandle::spawn(GeminiClient::new(&config))
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 760.0])
            .with_title("InsightLex"),
        ..Default::default()
    };
    eframe::run_native(
        "InsightLex",
        options,
        Box::new(move |_cc| Box::new(app::InsightLexApp::new(handle, runtime))),
    )
    .map_err(|e| anyhow!("failed to start the UI: {e}"))
}
