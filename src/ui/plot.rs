use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

use crate::chart::spec::{ChartSpec, Series};
use crate::color;

// ---------------------------------------------------------------------------
// Chart rendering
// ---------------------------------------------------------------------------

/// Render one chart spec: title row, then the plot.
pub fn chart(ui: &mut Ui, spec: &ChartSpec, height: f32) {
    ui.horizontal(|ui: &mut Ui| {
        let title = RichText::new(&spec.title).size(15.0);
        ui.label(if spec.style.bold_title { title.strong() } else { title });
        if ui
            .small_button("{ }")
            .on_hover_text("Copy spec as JSON")
            .clicked()
        {
            match spec.to_json() {
                Ok(json) => ui.ctx().copy_text(json),
                Err(e) => log::error!("Failed to serialise chart {}: {e}", spec.id.key()),
            }
        }
    });

    let fill = color::fill_for(spec.style.color.as_deref());
    let mut plot = Plot::new(spec.id.key())
        .height(height)
        .x_axis_label(spec.x.label.clone())
        .y_axis_label(spec.y.label.clone())
        .show_grid([spec.style.show_x_grid, true])
        .show_background(!spec.style.transparent_background)
        .allow_scroll(false);

    match &spec.series {
        Series::Points(points) => {
            let series: PlotPoints = points.iter().map(|p| [p.x, p.y]).collect();
            plot.show(ui, |plot_ui| {
                plot_ui.points(Points::new(series).radius(3.0).color(fill));
            });
        }
        Series::Bars {
            categories,
            segments,
        } => {
            let labels = categories.clone();
            plot = plot.x_axis_formatter(move |mark, _range| {
                let pos = mark.value.round();
                if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
                    return String::new();
                }
                labels.get(pos as usize).cloned().unwrap_or_default()
            });

            // Segments on the same category stack bottom-up in record order.
            let mut offsets = vec![0.0; categories.len()];
            let bars: Vec<Bar> = segments
                .iter()
                .filter_map(|seg| {
                    let base = offsets.get_mut(seg.category)?;
                    let bar = Bar::new(seg.category as f64, seg.value)
                        .base_offset(*base)
                        .width(0.7)
                        .fill(fill);
                    *base += seg.value;
                    Some(bar)
                })
                .collect();
            plot.show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(fill));
            });
        }
        Series::Bins(bins) => {
            let bars: Vec<Bar> = bins
                .iter()
                .map(|b| {
                    Bar::new((b.start + b.end) / 2.0, b.count as f64)
                        .width((b.end - b.start) * 0.95)
                        .fill(fill)
                })
                .collect();
            plot.show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(fill));
            });
        }
    }
}
