use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::filter::FilteredView;
use crate::data::model::{Record, REQUIRED_COLUMNS};

const ROW_HEIGHT: f32 = 18.0;

fn cells(rec: &Record) -> [String; 10] {
    [
        rec.age_group.clone(),
        rec.gender.clone(),
        rec.sleep_quality.to_string(),
        format!("{:.1}", rec.sleep_duration),
        rec.physical_activity.to_string(),
        rec.dietary_habits.clone(),
        rec.medication_usage.clone(),
        rec.daily_steps.to_string(),
        rec.sleep_disorders.to_string(),
        rec.calories_burned.to_string(),
    ]
}

/// Scrollable table of the filtered records, one column per attribute.
pub fn records_table(ui: &mut Ui, view: &FilteredView<'_>) {
    let rows: Vec<&Record> = view.records().collect();

    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(320.0)
        .columns(Column::auto().resizable(true), REQUIRED_COLUMNS.len())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for name in REQUIRED_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let rec = rows[row.index()];
                for text in cells(rec) {
                    row.col(|ui: &mut Ui| {
                        ui.label(text);
                    });
                }
            });
        });
}
