use eframe::egui;
use log::{error, info};

mod config;
mod ui;

use config::AppConfig;
use ui::SensoryJournalApp;

fn init_logging(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn main() -> anyhow::Result<()> {
    // The config picks the default log filter, so load it before logging starts
    let loaded = AppConfig::load();
    let filter = loaded
        .as_ref()
        .map(|config| config.logging.filter.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&filter);

    let config = loaded.map_err(|e| {
        error!("🚨 Failed to load configuration: {}", e);
        e
    })?;
    info!("Starting Sensory Trigger Journal egui application");

    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_title(window.title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        &window.title,
        options,
        Box::new(|cc| {
            ui::setup_journal_style(&cc.egui_ctx);
            Ok(Box::new(SensoryJournalApp::new()))
        }),
    )
    .map_err(|e| {
        error!("🚨 Application exited with an error: {}", e);
        anyhow::anyhow!("Failed to run app: {}", e)
    })
}
