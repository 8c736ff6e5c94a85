//! egui presentation layer: sidebar controls, KPI cards, charts and the
//! record table.

pub mod format;
pub mod panels;
pub mod plot;
pub mod table;
