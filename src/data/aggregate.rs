use std::collections::BTreeMap;

use super::filter::FilteredView;
use super::model::Record;
use crate::error::EmptyResult;

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean<'a>(view: &FilteredView<'a>, field: impl Fn(&'a Record) -> f64) -> Option<f64> {
    let n = view.len();
    if n == 0 {
        return None;
    }
    Some(view.records().map(field).sum::<f64>() / n as f64)
}

// ---------------------------------------------------------------------------
// KPI scalars
// ---------------------------------------------------------------------------

/// Headline means over the filtered records, each rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpis {
    pub sleep_quality: f64,
    pub sleep_duration: f64,
    pub daily_steps: f64,
    pub sleep_disorders: f64,
}

/// Compute the four KPI means. Fails on an empty view, where a mean is
/// undefined.
pub fn summarize(view: &FilteredView<'_>) -> Result<Kpis, EmptyResult> {
    let avg = |f: fn(&Record) -> f64| mean(view, f).map(round2).ok_or(EmptyResult);
    Ok(Kpis {
        sleep_quality: avg(|r| r.sleep_quality as f64)?,
        sleep_duration: avg(|r| r.sleep_duration)?,
        daily_steps: avg(|r| r.daily_steps as f64)?,
        sleep_disorders: avg(|r| r.sleep_disorders)?,
    })
}

// ---------------------------------------------------------------------------
// Grouped aggregate
// ---------------------------------------------------------------------------

/// Mean of a value within one category.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub group: String,
    pub mean: f64,
}

/// Mean sleep quality per age group, ascending by mean.
///
/// Groups are first laid out in key order; the sort is stable, so groups
/// with equal means keep that order.
pub fn mean_sleep_quality_by_age_group(view: &FilteredView<'_>) -> Vec<GroupMean> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in view.records() {
        let entry = sums.entry(rec.age_group.as_str()).or_insert((0.0, 0));
        entry.0 += rec.sleep_quality as f64;
        entry.1 += 1;
    }

    let mut groups: Vec<GroupMean> = sums
        .into_iter()
        .map(|(group, (sum, n))| GroupMean {
            group: group.to_string(),
            mean: sum / n as f64,
        })
        .collect();
    groups.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, FilterCriteria};
    use crate::data::model::fixtures::{self, record};
    use crate::data::model::Dataset;

    #[test]
    fn scenario_mean_sleep_quality() {
        let ds = fixtures::scenario();
        let criteria = FilterCriteria {
            gender: Some("M".to_string()),
            ..FilterCriteria::defaults(ds.options())
        };
        let view = apply(&ds, &criteria).unwrap();
        let kpis = summarize(&view).unwrap();
        assert_eq!(kpis.sleep_quality, 4.0);
        assert_eq!(kpis.sleep_duration, 7.0);
        assert_eq!(kpis.daily_steps, 8000.0);
        assert_eq!(kpis.sleep_disorders, 0.0);
    }

    #[test]
    fn means_are_rounded_and_deterministic() {
        let ds = Dataset::from_records(vec![
            record("A", "M", 1),
            record("A", "M", 1),
            record("A", "M", 2),
        ]);
        let view = apply(&ds, &FilterCriteria::unconstrained(ds.options())).unwrap();
        let first = summarize(&view).unwrap();
        assert_eq!(first.sleep_quality, 1.33);
        assert_eq!(summarize(&view).unwrap(), first);
    }

    #[test]
    fn empty_view_is_empty_result() {
        let ds = fixtures::scenario();
        let view = FilteredView::from_indices(&ds, Vec::new());
        assert_eq!(summarize(&view), Err(EmptyResult));
        assert!(mean_sleep_quality_by_age_group(&view).is_empty());
    }

    #[test]
    fn grouped_means_sorted_ascending() {
        let ds = Dataset::from_records(vec![
            record("60+", "M", 9),
            record("20-30", "M", 4),
            record("40-50", "M", 6),
            record("20-30", "M", 6),
        ]);
        let view = apply(&ds, &FilterCriteria::unconstrained(ds.options())).unwrap();
        let groups = mean_sleep_quality_by_age_group(&view);
        let names: Vec<&str> = groups.iter().map(|g| g.group.as_str()).collect();
        // 20-30 and 40-50 tie at 5.0; key order decides.
        assert_eq!(names, vec!["20-30", "40-50", "60+"]);
        assert_eq!(groups[0].mean, 5.0);
        assert_eq!(groups[2].mean, 9.0);
    }

    #[test]
    fn round2_half_away_from_zero() {
        assert_eq!(round2(2.345_000_1), 2.35);
        assert_eq!(round2(7543.123), 7543.12);
        assert_eq!(round2(-1.005_1), -1.01);
    }
}
