mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::Context;
use app::HealthInsightsApp;
use config::DashboardConfig;
use data::loader::DatasetStore;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();
    let store = DatasetStore::new(&config.data_path);

    // A dataset that cannot be loaded halts startup before any window opens.
    let dataset = store
        .get_or_load()
        .map_err(|e| {
            log::error!("Failed to load dataset: {e}");
            e
        })
        .with_context(|| format!("loading dataset from {}", store.path().display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(HealthInsightsApp::new(store, dataset, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
