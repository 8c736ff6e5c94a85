use std::collections::BTreeSet;
use std::sync::Arc;

use crate::chart::builder::build_all;
use crate::chart::spec::ChartSpec;
use crate::config::DashboardConfig;
use crate::data::aggregate::{summarize, Kpis};
use crate::data::filter::{apply, FilterCriteria, FilteredView, ValueRange};
use crate::data::model::Dataset;
use crate::error::EmptyResult;

// ---------------------------------------------------------------------------
// Snapshot – everything derived from one set of criteria
// ---------------------------------------------------------------------------

/// Output of one recomputation cycle.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Dataset indices of the filtered records.
    pub indices: Vec<usize>,
    pub kpis: Kpis,
    pub charts: Vec<ChartSpec>,
}

/// Categorical filters backed by a multiselect control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AgeGroup,
    DietaryHabits,
    MedicationUsage,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, shared with the store.
    pub dataset: Arc<Dataset>,

    /// Current control selections.
    pub criteria: FilterCriteria,

    /// Result of the latest recomputation.
    pub outcome: Result<Snapshot, EmptyResult>,

    histogram_bins: usize,
}

impl AppState {
    /// Initialise controls from the dataset and compute the first cycle.
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let criteria = FilterCriteria::defaults(dataset.options());
        let mut state = Self {
            dataset,
            criteria,
            outcome: Err(EmptyResult),
            histogram_bins: config.histogram_bins,
        };
        state.refilter();
        state
    }

    /// Recompute the filtered view, KPIs and charts from scratch.
    pub fn refilter(&mut self) {
        self.outcome = compute(&self.dataset, &self.criteria, self.histogram_bins);
        match &self.outcome {
            Ok(snapshot) => log::debug!(
                "{} of {} records match the current filters",
                snapshot.indices.len(),
                self.dataset.len()
            ),
            Err(e) => log::warn!("{e}"),
        }
    }

    /// The filtered records of the latest cycle, if any matched.
    pub fn view(&self) -> Option<FilteredView<'_>> {
        let snapshot = self.outcome.as_ref().ok()?;
        Some(FilteredView::from_indices(
            &self.dataset,
            snapshot.indices.clone(),
        ))
    }

    fn selection_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::AgeGroup => &mut self.criteria.age_groups,
            Category::DietaryHabits => &mut self.criteria.dietary_habits,
            Category::MedicationUsage => &mut self.criteria.medication_usage,
        }
    }

    /// All valid values for a categorical control.
    pub fn options_for(&self, category: Category) -> &[String] {
        let options = self.dataset.options();
        match category {
            Category::AgeGroup => &options.age_groups,
            Category::DietaryHabits => &options.dietary_habits,
            Category::MedicationUsage => &options.medication_usage,
        }
    }

    pub fn is_selected(&self, category: Category, value: &str) -> bool {
        match category {
            Category::AgeGroup => self.criteria.age_groups.contains(value),
            Category::DietaryHabits => self.criteria.dietary_habits.contains(value),
            Category::MedicationUsage => self.criteria.medication_usage.contains(value),
        }
    }

    /// Toggle a single value in a multiselect.
    pub fn toggle(&mut self, category: Category, value: &str) {
        let selected = self.selection_mut(category);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select all values of a multiselect.
    pub fn select_all(&mut self, category: Category) {
        let all: BTreeSet<String> = self.options_for(category).iter().cloned().collect();
        *self.selection_mut(category) = all;
        self.refilter();
    }

    /// Deselect all values of a multiselect.
    pub fn select_none(&mut self, category: Category) {
        self.selection_mut(category).clear();
        self.refilter();
    }

    pub fn set_gender(&mut self, gender: &str) {
        self.criteria.gender = Some(gender.to_string());
        self.refilter();
    }

    /// Set the sleep quality bounds; inverted bounds are swapped.
    pub fn set_sleep_quality(&mut self, a: i64, b: i64) {
        self.criteria.sleep_quality = ordered(a, b);
        self.refilter();
    }

    /// Set the activity level bounds; inverted bounds are swapped.
    pub fn set_physical_activity(&mut self, a: i64, b: i64) {
        self.criteria.physical_activity = ordered(a, b);
        self.refilter();
    }
}

fn ordered(a: i64, b: i64) -> ValueRange {
    ValueRange::new(a.min(b), a.max(b)).unwrap_or_else(ValueRange::unbounded)
}

/// One full cycle: filter, then aggregate and chart the survivors.
pub fn compute(
    dataset: &Dataset,
    criteria: &FilterCriteria,
    histogram_bins: usize,
) -> Result<Snapshot, EmptyResult> {
    let view = apply(dataset, criteria)?;
    let kpis = summarize(&view)?;
    let charts = build_all(&view, histogram_bins);
    Ok(Snapshot {
        indices: view.indices().to_vec(),
        kpis,
        charts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures;

    fn state() -> AppState {
        AppState::new(Arc::new(fixtures::scenario()), &DashboardConfig::default())
    }

    #[test]
    fn initial_cycle_uses_first_gender() {
        let state = state();
        let snapshot = state.outcome.as_ref().unwrap();
        assert_eq!(snapshot.indices, vec![0, 2]);
        assert_eq!(snapshot.kpis.sleep_quality, 4.0);
        assert_eq!(snapshot.charts.len(), 8);
    }

    #[test]
    fn switching_gender_recomputes() {
        let mut state = state();
        state.set_gender("F");
        let snapshot = state.outcome.as_ref().unwrap();
        assert_eq!(snapshot.indices, vec![1]);
        assert_eq!(snapshot.kpis.sleep_quality, 8.0);
    }

    #[test]
    fn empty_selection_suppresses_cycle_then_recovers() {
        let mut state = state();
        state.select_none(Category::DietaryHabits);
        assert_eq!(state.outcome.as_ref().unwrap_err(), &EmptyResult);
        assert!(state.view().is_none());

        state.select_all(Category::DietaryHabits);
        assert!(state.outcome.is_ok());
        assert_eq!(state.view().unwrap().len(), 2);
    }

    #[test]
    fn toggle_removes_then_restores() {
        let mut state = state();
        state.toggle(Category::AgeGroup, "B");
        assert!(!state.is_selected(Category::AgeGroup, "B"));
        assert_eq!(state.outcome.as_ref().unwrap().indices, vec![0]);

        state.toggle(Category::AgeGroup, "B");
        assert!(state.is_selected(Category::AgeGroup, "B"));
        assert_eq!(state.outcome.as_ref().unwrap().indices, vec![0, 2]);
    }

    #[test]
    fn inverted_slider_bounds_are_ordered() {
        let mut state = state();
        state.set_sleep_quality(10, 9);
        assert_eq!(state.criteria.sleep_quality, ValueRange::new(9, 10).unwrap());
        assert!(state.outcome.is_err());
    }
}
