use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use super::format;
use crate::data::aggregate::Kpis;
use crate::data::filter::{ValueRange, ACTIVITY_LIMITS, SLEEP_QUALITY_LIMITS};
use crate::state::{AppState, Category};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the "Health Parameters" sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Health Parameters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            multiselect(ui, state, Category::AgeGroup, "Select Age Group:");
            ui.separator();

            gender_radio(ui, state);
            ui.separator();

            let sleep = state.criteria.sleep_quality;
            if let Some((lo, hi)) =
                range_sliders(ui, "Sleep Quality (Rating):", sleep, SLEEP_QUALITY_LIMITS)
            {
                state.set_sleep_quality(lo, hi);
            }
            ui.separator();

            let activity = state.criteria.physical_activity;
            if let Some((lo, hi)) =
                range_sliders(ui, "Physical Activity Level:", activity, ACTIVITY_LIMITS)
            {
                state.set_physical_activity(lo, hi);
            }
            ui.separator();

            multiselect(ui, state, Category::DietaryHabits, "Dietary Habits:");
            ui.separator();
            multiselect(ui, state, Category::MedicationUsage, "Medication Usage:");
        });
}

/// Checkbox list with All / None shortcuts.
fn multiselect(ui: &mut Ui, state: &mut AppState, category: Category, label: &str) {
    let options = state.options_for(category).to_vec();
    let n_selected = options
        .iter()
        .filter(|v| state.is_selected(category, v))
        .count();
    let header_text = format!("{label}  ({n_selected}/{})", options.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(category);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(category);
                }
            });

            for value in &options {
                let mut checked = state.is_selected(category, value);
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    state.toggle(category, value);
                }
            }
        });
}

fn gender_radio(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Select Gender:");
    let genders = state.dataset.options().genders.clone();
    for gender in &genders {
        let active = state.criteria.gender.as_deref() == Some(gender.as_str());
        if ui.radio(active, gender.as_str()).clicked() && !active {
            state.set_gender(gender);
        }
    }
}

/// Two sliders for an inclusive range. Returns new bounds when either
/// moved; the other thumb is pushed so the bounds stay ordered.
fn range_sliders(
    ui: &mut Ui,
    label: &str,
    current: ValueRange,
    limits: ValueRange,
) -> Option<(i64, i64)> {
    ui.strong(label);
    let (mut lo, mut hi) = (current.min(), current.max());
    let span = limits.min()..=limits.max();

    let lo_changed = ui.add(Slider::new(&mut lo, span.clone()).text("min")).changed();
    let hi_changed = ui.add(Slider::new(&mut hi, span).text("max")).changed();

    if lo_changed && lo > hi {
        hi = lo;
    }
    if hi_changed && hi < lo {
        lo = hi;
    }
    (lo_changed || hi_changed).then_some((lo, hi))
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// Four headline numbers side by side.
pub fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    let cards = [
        ("Sleep quality", format!("{} / 10", format::decimal(kpis.sleep_quality))),
        ("Sleep duration", format!("{} hours", format::decimal(kpis.sleep_duration))),
        ("Daily steps", format!("{} steps", format::thousands(kpis.daily_steps))),
        ("Sleep disorders", format::thousands(kpis.sleep_disorders)),
    ];
    ui.columns(cards.len(), |columns| {
        for (col, (title, value)) in columns.iter_mut().zip(cards) {
            col.label(RichText::new(title).size(18.0).strong());
            col.label(RichText::new(value).size(22.0));
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!("{} records loaded", state.dataset.len()));
        ui.separator();
        match &state.outcome {
            Ok(snapshot) => {
                ui.label(format!("{} matching", snapshot.indices.len()));
            }
            Err(e) => {
                ui.label(RichText::new(e.to_string()).color(Color32::from_rgb(230, 160, 0)));
            }
        }
    });
}
