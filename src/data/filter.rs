use std::collections::BTreeSet;

use super::model::{Dataset, FilterOptions, Record};
use crate::error::EmptyResult;

// ---------------------------------------------------------------------------
// ValueRange – inclusive numeric bounds
// ---------------------------------------------------------------------------

/// Inclusive `[min, max]` bounds; `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// `None` if the bounds are inverted.
    pub fn new(min: i64, max: i64) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    /// Bounds that admit every value.
    pub fn unbounded() -> Self {
        Self {
            min: i64::MIN,
            max: i64::MAX,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Slider limits for the sleep quality rating.
pub const SLEEP_QUALITY_LIMITS: ValueRange = ValueRange { min: 1, max: 10 };

/// Slider limits for the physical activity level.
pub const ACTIVITY_LIMITS: ValueRange = ValueRange { min: 0, max: 2 };

// ---------------------------------------------------------------------------
// FilterCriteria – the user's current selections
// ---------------------------------------------------------------------------

/// Per-attribute constraints, combined with logical AND.
///
/// An empty set-membership constraint matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub age_groups: BTreeSet<String>,
    /// Single-select in the UI; `None` leaves gender unconstrained.
    pub gender: Option<String>,
    pub sleep_quality: ValueRange,
    pub physical_activity: ValueRange,
    pub dietary_habits: BTreeSet<String>,
    pub medication_usage: BTreeSet<String>,
}

impl FilterCriteria {
    /// The initial control state: every category selected, the first
    /// gender chosen and both sliders at their full extent.
    pub fn defaults(options: &FilterOptions) -> Self {
        Self {
            age_groups: options.age_groups.iter().cloned().collect(),
            gender: options.genders.first().cloned(),
            sleep_quality: SLEEP_QUALITY_LIMITS,
            physical_activity: ACTIVITY_LIMITS,
            dietary_habits: options.dietary_habits.iter().cloned().collect(),
            medication_usage: options.medication_usage.iter().cloned().collect(),
        }
    }

    /// Criteria that every record of the dataset satisfies.
    #[cfg(test)]
    pub fn unconstrained(options: &FilterOptions) -> Self {
        Self {
            gender: None,
            sleep_quality: ValueRange::unbounded(),
            physical_activity: ValueRange::unbounded(),
            ..Self::defaults(options)
        }
    }

    /// Whether a single record passes every constraint.
    pub fn matches(&self, rec: &Record) -> bool {
        self.age_groups.contains(&rec.age_group)
            && self.gender.as_ref().map_or(true, |g| *g == rec.gender)
            && self.sleep_quality.contains(rec.sleep_quality)
            && self.physical_activity.contains(rec.physical_activity)
            && self.dietary_habits.contains(&rec.dietary_habits)
            && self.medication_usage.contains(&rec.medication_usage)
    }
}

// ---------------------------------------------------------------------------
// FilteredView – matching records, borrowed from the dataset
// ---------------------------------------------------------------------------

/// The records of a [`Dataset`] that satisfy a [`FilterCriteria`], in
/// dataset order. Never empty when produced by [`apply`].
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Rebuild a view from indices computed earlier against `dataset`.
    /// Out-of-range indices are dropped.
    pub fn from_indices(dataset: &'a Dataset, mut indices: Vec<usize>) -> Self {
        indices.retain(|&i| i < dataset.len());
        Self { dataset, indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl ExactSizeIterator<Item = &'a Record> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Return the records passing all active filters, or [`EmptyResult`] when
/// none do.
pub fn apply<'a>(
    dataset: &'a Dataset,
    criteria: &FilterCriteria,
) -> Result<FilteredView<'a>, EmptyResult> {
    let indices: Vec<usize> = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect();

    if indices.is_empty() {
        return Err(EmptyResult);
    }
    Ok(FilteredView { dataset, indices })
}
