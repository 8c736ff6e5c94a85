/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   health.csv
///        │
///        ▼
///   ┌──────────────┐
///   │ DatasetStore  │  parse once → Arc<Dataset>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → FilteredView (or EmptyResult)
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  KPI means, grouped means
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
