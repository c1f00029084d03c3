mod app;
mod charts;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, anyhow};
use app::FitnessDashboardApp;
use clap::Parser;
use config::{Args, DashboardConfig};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = DashboardConfig::resolve(&args).context("loading configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fitness Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(FitnessDashboardApp::new(&config)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
