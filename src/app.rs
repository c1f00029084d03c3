use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::loader::load_file;
use crate::state::DashboardState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FitnessDashboardApp {
    pub state: DashboardState,
}

impl FitnessDashboardApp {
    /// Load the configured data file once and build the initial dashboard.
    /// A failed load leaves the app without charts until the user opens a file.
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = DashboardState::new(config.charts());
        log::info!("Loading {}", config.data_path.display());
        state.on_load_complete(load_file(&config.data_path));
        Self { state }
    }
}

impl eframe::App for FitnessDashboardApp {
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

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::chart_panel(ui, &self.state);
        });
    }
}
