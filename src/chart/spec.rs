use serde::Serialize;

use crate::config::ACCENT_COLOR;

// ---------------------------------------------------------------------------
// ChartSpec – renderer-independent chart description
// ---------------------------------------------------------------------------

/// Identifies one of the dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    SleepQualityByAgeGroup,
    SleepQualityVsDisorders,
    SleepQualityDistribution,
    CaloriesVsSteps,
    ActivityByCalories,
    ActivityBySteps,
    SleepQualityByDiet,
    SleepQualityByMedication,
}

impl ChartId {
    /// Stable identifier used for widget ids and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            ChartId::SleepQualityByAgeGroup => "sleep_quality_by_age_group",
            ChartId::SleepQualityVsDisorders => "sleep_quality_vs_disorders",
            ChartId::SleepQualityDistribution => "sleep_quality_distribution",
            ChartId::CaloriesVsSteps => "calories_vs_steps",
            ChartId::ActivityByCalories => "activity_by_calories",
            ChartId::ActivityBySteps => "activity_by_steps",
            ChartId::SleepQualityByDiet => "sleep_quality_by_diet",
            ChartId::SleepQualityByMedication => "sleep_quality_by_medication",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Scatter,
    Histogram,
}

/// A single `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One bar piece; pieces sharing a category stack on top of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarSegment {
    /// Index into the owning series' `categories`.
    pub category: usize,
    pub value: f64,
}

/// A histogram bucket covering `[start, end)` (the last one is closed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// The data a chart draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Series {
    Points(Vec<Point>),
    Bars {
        /// Axis categories in display order.
        categories: Vec<String>,
        segments: Vec<BarSegment>,
    },
    Bins(Vec<Bin>),
}

impl Series {
    /// Total bar height per category, in category order.
    #[cfg(test)]
    pub fn category_totals(&self) -> Vec<f64> {
        match self {
            Series::Bars {
                categories,
                segments,
            } => {
                let mut totals = vec![0.0; categories.len()];
                for seg in segments {
                    if let Some(t) = totals.get_mut(seg.category) {
                        *t += seg.value;
                    }
                }
                totals
            }
            _ => Vec::new(),
        }
    }
}

/// Rendering hints. All dashboard charts share the neutral defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartStyle {
    /// Hex fill colour; `None` leaves the renderer's default.
    pub color: Option<String>,
    pub bold_title: bool,
    pub show_x_grid: bool,
    pub transparent_background: bool,
}

impl ChartStyle {
    pub fn neutral() -> Self {
        Self {
            color: None,
            bold_title: false,
            show_x_grid: false,
            transparent_background: true,
        }
    }

    /// Neutral style with the accent colour and a bold title.
    pub fn accent() -> Self {
        Self {
            color: Some(ACCENT_COLOR.to_string()),
            bold_title: true,
            ..Self::neutral()
        }
    }
}

/// Axis binding: the source column and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub field: String,
    pub label: String,
}

impl Axis {
    pub fn field(name: &str) -> Self {
        Self {
            field: name.to_string(),
            label: name.to_string(),
        }
    }

    pub fn labeled(field: &str, label: &str) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub kind: ChartKind,
    pub title: String,
    pub x: Axis,
    pub y: Axis,
    pub series: Series,
    pub style: ChartStyle,
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
