//! Pure functions from filtered records to [`ChartSpec`]s.

use super::spec::{
    Axis, BarSegment, Bin, ChartId, ChartKind, ChartSpec, ChartStyle, Point, Series,
};
use crate::data::aggregate::{mean_sleep_quality_by_age_group, GroupMean};
use crate::data::filter::FilteredView;
use crate::data::model::{
    Record, AGE_GROUP, CALORIES_BURNED, DAILY_STEPS, DIETARY_HABITS, MEDICATION_USAGE,
    PHYSICAL_ACTIVITY, SLEEP_DISORDERS, SLEEP_QUALITY,
};

/// Build every dashboard chart, in page order.
pub fn build_all(view: &FilteredView<'_>, histogram_bins: usize) -> Vec<ChartSpec> {
    let by_age = mean_sleep_quality_by_age_group(view);
    vec![
        sleep_quality_by_age_group(&by_age),
        sleep_quality_vs_disorders(view),
        sleep_quality_distribution(view, histogram_bins),
        calories_vs_steps(view),
        activity_by_calories(view),
        activity_by_steps(view),
        sleep_quality_by_diet(view),
        sleep_quality_by_medication(view),
    ]
}

// ---------------------------------------------------------------------------
// Individual charts
// ---------------------------------------------------------------------------

/// Bar: mean sleep quality per age group, in the given (ascending) order.
pub fn sleep_quality_by_age_group(groups: &[GroupMean]) -> ChartSpec {
    let series = Series::Bars {
        categories: groups.iter().map(|g| g.group.clone()).collect(),
        segments: groups
            .iter()
            .enumerate()
            .map(|(category, g)| BarSegment {
                category,
                value: g.mean,
            })
            .collect(),
    };
    ChartSpec {
        id: ChartId::SleepQualityByAgeGroup,
        kind: ChartKind::Bar,
        title: "Average Sleep Quality by Age Group".to_string(),
        x: Axis::labeled(AGE_GROUP, "Age group"),
        y: Axis::field(SLEEP_QUALITY),
        series,
        style: ChartStyle::accent(),
    }
}

pub fn sleep_quality_vs_disorders(view: &FilteredView<'_>) -> ChartSpec {
    ChartSpec {
        id: ChartId::SleepQualityVsDisorders,
        kind: ChartKind::Scatter,
        title: "Sleep Quality vs. Sleep Disorders".to_string(),
        x: Axis::field(SLEEP_QUALITY),
        y: Axis::field(SLEEP_DISORDERS),
        series: points(view, |r| r.sleep_quality as f64, |r| r.sleep_disorders),
        style: ChartStyle {
            color: None,
            ..ChartStyle::accent()
        },
    }
}

/// Histogram of sleep quality with `bins` equal-width buckets.
pub fn sleep_quality_distribution(view: &FilteredView<'_>, bins: usize) -> ChartSpec {
    let values: Vec<f64> = view.records().map(|r| r.sleep_quality as f64).collect();
    ChartSpec {
        id: ChartId::SleepQualityDistribution,
        kind: ChartKind::Histogram,
        title: "Sleep Quality Distribution".to_string(),
        x: Axis::field(SLEEP_QUALITY),
        y: Axis::labeled("count", "Count"),
        series: Series::Bins(histogram(&values, bins)),
        style: ChartStyle::neutral(),
    }
}

pub fn calories_vs_steps(view: &FilteredView<'_>) -> ChartSpec {
    ChartSpec {
        id: ChartId::CaloriesVsSteps,
        kind: ChartKind::Scatter,
        title: "Calories Burned vs. Daily Steps".to_string(),
        x: Axis::field(CALORIES_BURNED),
        y: Axis::field(DAILY_STEPS),
        series: points(view, |r| r.calories_burned, |r| r.daily_steps as f64),
        style: ChartStyle {
            color: None,
            ..ChartStyle::accent()
        },
    }
}

pub fn activity_by_calories(view: &FilteredView<'_>) -> ChartSpec {
    ChartSpec {
        id: ChartId::ActivityByCalories,
        kind: ChartKind::Bar,
        title: "Physical Activity Level by Calories Burned".to_string(),
        x: Axis::field(PHYSICAL_ACTIVITY),
        y: Axis::field(CALORIES_BURNED),
        series: numeric_bars(view, |r| r.physical_activity, |r| r.calories_burned),
        style: ChartStyle::accent(),
    }
}

pub fn activity_by_steps(view: &FilteredView<'_>) -> ChartSpec {
    ChartSpec {
        id: ChartId::ActivityBySteps,
        kind: ChartKind::Bar,
        title: "Physical Activity Level by Daily Steps".to_string(),
        x: Axis::field(PHYSICAL_ACTIVITY),
        y: Axis::field(DAILY_STEPS),
        series: numeric_bars(view, |r| r.physical_activity, |r| r.daily_steps as f64),
        style: ChartStyle::accent(),
    }
}

pub fn sleep_quality_by_diet(view: &FilteredView<'_>) -> ChartSpec {
    ChartSpec {
        id: ChartId::SleepQualityByDiet,
        kind: ChartKind::Bar,
        title: "Sleep Quality across Dietary Habits".to_string(),
        x: Axis::field(DIETARY_HABITS),
        y: Axis::field(SLEEP_QUALITY),
        series: category_bars(view, |r| &r.dietary_habits, |r| r.sleep_quality as f64),
        style: ChartStyle::accent(),
    }
}

pub fn sleep_quality_by_medication(view: &FilteredView<'_>) -> ChartSpec {
    ChartSpec {
        id: ChartId::SleepQualityByMedication,
        kind: ChartKind::Bar,
        title: "Sleep Quality across Medication Usage".to_string(),
        x: Axis::field(MEDICATION_USAGE),
        y: Axis::field(SLEEP_QUALITY),
        series: category_bars(view, |r| &r.medication_usage, |r| r.sleep_quality as f64),
        style: ChartStyle::accent(),
    }
}

// ---------------------------------------------------------------------------
// Series helpers
// ---------------------------------------------------------------------------

fn points(
    view: &FilteredView<'_>,
    x: impl Fn(&Record) -> f64,
    y: impl Fn(&Record) -> f64,
) -> Series {
    Series::Points(view.records().map(|r| Point { x: x(r), y: y(r) }).collect())
}

/// One segment per record; categories in order of first appearance.
fn category_bars<'a>(
    view: &FilteredView<'a>,
    key: impl Fn(&'a Record) -> &'a String,
    value: impl Fn(&Record) -> f64,
) -> Series {
    let mut categories: Vec<String> = Vec::new();
    let mut segments = Vec::with_capacity(view.len());
    for rec in view.records() {
        let k = key(rec);
        let category = match categories.iter().position(|c| c == k) {
            Some(i) => i,
            None => {
                categories.push(k.clone());
                categories.len() - 1
            }
        };
        segments.push(BarSegment {
            category,
            value: value(rec),
        });
    }
    Series::Bars {
        categories,
        segments,
    }
}

/// One segment per record on a numeric axis; categories ascend numerically.
fn numeric_bars(
    view: &FilteredView<'_>,
    key: impl Fn(&Record) -> i64,
    value: impl Fn(&Record) -> f64,
) -> Series {
    let mut levels: Vec<i64> = view.records().map(&key).collect();
    levels.sort_unstable();
    levels.dedup();

    let segments = view
        .records()
        .filter_map(|rec| {
            let category = levels.binary_search(&key(rec)).ok()?;
            Some(BarSegment {
                category,
                value: value(rec),
            })
        })
        .collect();
    Series::Bars {
        categories: levels.iter().map(i64::to_string).collect(),
        segments,
    }
}

/// Equal-width bins spanning `[min, max]`. A single distinct value is
/// widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi <= lo {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            start: lo + i as f64 * width,
            end: lo + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, FilterCriteria};
    use crate::data::model::fixtures::record;
    use crate::data::model::Dataset;

    fn dataset() -> Dataset {
        let mut a = record("20-30", "M", 8);
        a.physical_activity = 2;
        a.dietary_habits = "Unhealthy".to_string();
        a.medication_usage = "Yes".to_string();
        a.calories_burned = 2600.0;
        a.daily_steps = 12000;

        let mut b = record("50-60", "M", 4);
        b.physical_activity = 0;
        b.calories_burned = 1700.0;
        b.daily_steps = 2000;
        b.sleep_disorders = 1.0;

        let mut c = record("20-30", "F", 6);
        c.physical_activity = 2;
        c.calories_burned = 2400.0;
        c.daily_steps = 9000;

        Dataset::from_records(vec![a, b, c])
    }

    fn all_charts(ds: &Dataset) -> Vec<ChartSpec> {
        let view = apply(ds, &FilterCriteria::unconstrained(ds.options())).unwrap();
        build_all(&view, 5)
    }

    #[test]
    fn builds_eight_charts_in_page_order() {
        let ds = dataset();
        let ids: Vec<ChartId> = all_charts(&ds).iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                ChartId::SleepQualityByAgeGroup,
                ChartId::SleepQualityVsDisorders,
                ChartId::SleepQualityDistribution,
                ChartId::CaloriesVsSteps,
                ChartId::ActivityByCalories,
                ChartId::ActivityBySteps,
                ChartId::SleepQualityByDiet,
                ChartId::SleepQualityByMedication,
            ]
        );
    }

    #[test]
    fn all_charts_share_neutral_background() {
        let ds = dataset();
        for chart in all_charts(&ds) {
            assert!(!chart.style.show_x_grid, "{:?}", chart.id);
            assert!(chart.style.transparent_background, "{:?}", chart.id);
        }
    }

    #[test]
    fn age_group_bars_follow_grouped_order() {
        let ds = dataset();
        let chart = &all_charts(&ds)[0];
        assert_eq!(chart.kind, ChartKind::Bar);
        match &chart.series {
            Series::Bars { categories, .. } => assert_eq!(categories, &["50-60", "20-30"]),
            other => panic!("unexpected series {other:?}"),
        }
        assert_eq!(chart.series.category_totals(), vec![4.0, 7.0]);
        assert_eq!(chart.style.color.as_deref(), Some("#0083B8"));
    }

    #[test]
    fn scatter_has_one_point_per_record() {
        let ds = dataset();
        let chart = &all_charts(&ds)[3];
        assert_eq!(chart.kind, ChartKind::Scatter);
        assert_eq!(chart.x.field, CALORIES_BURNED);
        assert_eq!(chart.y.field, DAILY_STEPS);
        match &chart.series {
            Series::Points(points) => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[1], Point { x: 1700.0, y: 2000.0 });
            }
            other => panic!("unexpected series {other:?}"),
        }
    }

    #[test]
    fn activity_bars_stack_per_level_in_numeric_order() {
        let ds = dataset();
        let chart = activity_by_steps(
            &apply(&ds, &FilterCriteria::unconstrained(ds.options())).unwrap(),
        );
        match &chart.series {
            Series::Bars {
                categories,
                segments,
            } => {
                assert_eq!(categories, &["0", "2"]);
                assert_eq!(segments.len(), 3);
            }
            other => panic!("unexpected series {other:?}"),
        }
        assert_eq!(chart.series.category_totals(), vec![2000.0, 21000.0]);
    }

    #[test]
    fn category_bars_keep_first_appearance() {
        let ds = dataset();
        let chart = &all_charts(&ds)[6];
        match &chart.series {
            Series::Bars { categories, .. } => {
                assert_eq!(categories, &["Unhealthy", "Healthy"])
            }
            other => panic!("unexpected series {other:?}"),
        }
        assert_eq!(chart.series.category_totals(), vec![8.0, 10.0]);
    }

    #[test]
    fn disorder_scatter_binds_sleep_quality_to_disorders() {
        let ds = dataset();
        let chart = &all_charts(&ds)[1];
        assert_eq!(chart.kind, ChartKind::Scatter);
        assert_eq!(chart.x.field, SLEEP_QUALITY);
        assert_eq!(chart.y.field, SLEEP_DISORDERS);
        assert_eq!(
            chart.series,
            Series::Points(vec![
                Point { x: 8.0, y: 0.0 },
                Point { x: 4.0, y: 1.0 },
                Point { x: 6.0, y: 0.0 },
            ])
        );
    }

    #[test]
    fn activity_calorie_bars_sum_per_level() {
        let ds = dataset();
        let chart = &all_charts(&ds)[4];
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.x.field, PHYSICAL_ACTIVITY);
        assert_eq!(chart.y.field, CALORIES_BURNED);
        match &chart.series {
            Series::Bars { categories, .. } => assert_eq!(categories, &["0", "2"]),
            other => panic!("unexpected series {other:?}"),
        }
        assert_eq!(chart.series.category_totals(), vec![1700.0, 5000.0]);
    }

    #[test]
    fn medication_bars_bind_sleep_quality() {
        let ds = dataset();
        let chart = &all_charts(&ds)[7];
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.x.field, MEDICATION_USAGE);
        assert_eq!(chart.y.field, SLEEP_QUALITY);
        match &chart.series {
            Series::Bars { categories, .. } => assert_eq!(categories, &["Yes", "No"]),
            other => panic!("unexpected series {other:?}"),
        }
        assert_eq!(chart.series.category_totals(), vec![8.0, 10.0]);
    }

    #[test]
    fn histogram_counts_cover_every_value() {
        let values = [1.0, 2.0, 3.0, 5.0, 7.0, 9.0, 10.0, 10.0];
        let bins = histogram(&values, 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].start, 1.0);
        assert!((bins[4].end - 10.0).abs() < 1e-9);
        // The maximum falls in the closed last bin.
        assert_eq!(bins[4].count, 3);
    }

    #[test]
    fn histogram_widens_single_value() {
        let bins = histogram(&[4.0, 4.0], 5);
        assert_eq!(bins[0].start, 3.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert!(histogram(&[], 5).is_empty());
    }

    #[test]
    fn spec_serializes_to_json() {
        let ds = dataset();
        let json = all_charts(&ds)[2].to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "sleep_quality_distribution");
        assert_eq!(value["kind"], "histogram");
        assert_eq!(value["series"]["type"], "bins");
        assert_eq!(value["series"]["data"].as_array().unwrap().len(), 5);
    }
}
