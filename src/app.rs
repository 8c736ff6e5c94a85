use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::data::loader::DatasetStore;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

/// Charts per row on the main page.
const CHART_ROWS: [usize; 3] = [3, 3, 2];

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HealthInsightsApp {
    pub state: AppState,
    config: DashboardConfig,
    // Keeps the cached dataset alive for the process lifetime.
    _store: DatasetStore,
}

impl HealthInsightsApp {
    pub fn new(store: DatasetStore, dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(dataset, &config),
            config,
            _store: store,
        }
    }
}

impl eframe::App for HealthInsightsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, charts, records ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| main_page(ui, &self.state, &self.config));
        });
    }
}

fn main_page(ui: &mut Ui, state: &AppState, config: &DashboardConfig) {
    // An empty result replaces the whole page with the warning.
    let snapshot = match &state.outcome {
        Ok(snapshot) => snapshot,
        Err(e) => {
            ui.label(RichText::new(e.to_string()).color(Color32::from_rgb(230, 160, 0)));
            return;
        }
    };

    ui.heading(RichText::new(&config.title).size(28.0));
    ui.add_space(12.0);

    panels::kpi_row(ui, &snapshot.kpis);
    ui.separator();

    let mut charts = snapshot.charts.iter();
    for per_row in CHART_ROWS {
        let row: Vec<_> = charts.by_ref().take(per_row).collect();
        if row.is_empty() {
            break;
        }
        ui.columns(row.len(), |columns| {
            for (col, spec) in columns.iter_mut().zip(&row) {
                plot::chart(col, spec, config.chart_height);
            }
        });
        ui.separator();
    }

    if let Some(view) = state.view() {
        egui::CollapsingHeader::new(format!("Filtered records ({})", view.len()))
            .id_salt("filtered_records")
            .default_open(false)
            .show(ui, |ui: &mut Ui| table::records_table(ui, &view));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures;

    /// Run one headless frame of the main page and collect every text drawn.
    fn rendered_text(state: &AppState, config: &DashboardConfig) -> Vec<String> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| main_page(ui, state, config));
        });
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Text(text) => Some(text.galley.text().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_result_shows_only_the_warning() {
        let config = DashboardConfig::default();
        let mut state = AppState::new(Arc::new(fixtures::scenario()), &config);
        state.set_sleep_quality(9, 10);

        let texts = rendered_text(&state, &config);
        assert!(texts.iter().any(|t| t.starts_with("No data available")));
        assert!(!texts.iter().any(|t| t == &config.title));
    }

    #[test]
    fn matching_records_show_title() {
        let config = DashboardConfig::default();
        let state = AppState::new(Arc::new(fixtures::scenario()), &config);

        let texts = rendered_text(&state, &config);
        assert!(texts.iter().any(|t| t == &config.title));
        assert!(!texts.iter().any(|t| t.starts_with("No data available")));
    }
}
