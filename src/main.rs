mod analytics;
mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SocialPulseApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env().unwrap_or_else(|e| {
        log::warn!("{e}; using default configuration");
        Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Social Media Analytics Pro",
        options,
        Box::new(move |_cc| Ok(Box::new(SocialPulseApp::new(config)))),
    )
}
