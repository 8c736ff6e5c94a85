/// Chart layer: renderer-independent chart descriptions built from the
/// filtered records.
///
/// ```text
///   FilteredView ──► builder ──► Vec<ChartSpec> ──► ui::plot
/// ```

pub mod builder;
pub mod spec;
