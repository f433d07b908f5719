use anyhow::Result;
use eframe::egui;
use log::info;

mod config;
mod gui;
mod models;

use config::DeckConfig;
use gui::DeckApp;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DeckConfig::load()?;
    info!(
        "Starting {} in {} mode at slide {} ({:?} theme)",
        config.title,
        config.initial_mode,
        config.start_slide + 1,
        config.theme
    );

    let builder = egui::ViewportBuilder::default()
        .with_title(config.title.clone())
        .with_inner_size(egui::vec2(config.window.width, config.window.height));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    let app_name = config.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(DeckApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run presentation window: {}", e))
}
