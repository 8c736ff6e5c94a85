use std::path::PathBuf;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "health.csv";

/// Accent colour shared by the bar charts.
pub const ACCENT_COLOR: &str = "#0083B8";

/// Static dashboard settings. There are no flags or environment overrides;
/// everything the app needs is fixed here.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Height of each chart in the main page, in points.
    pub chart_height: f32,
    pub histogram_bins: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            title: "HealthTech Insights Dashboard".to_string(),
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 600.0],
            chart_height: 260.0,
            histogram_bins: 5,
        }
    }
}
