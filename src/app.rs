use eframe::egui;

use crate::config::Config;
use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SocialPulseApp {
    pub state: AppState,
}

impl SocialPulseApp {
    /// Build the app and load the configured dataset. A failed load leaves
    /// the dashboard empty with the error in the top bar.
    pub fn new(config: Config) -> Self {
        let data_path = config.data_path.clone();
        let mut state = AppState::new(config);
        let _ = state.load(&data_path);
        Self { state }
    }
}

impl eframe::App for SocialPulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, tabs, insights ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::central_panel(ui, &mut self.state);
        });
    }
}
