use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use exposure_viewer::color::color_for;
use exposure_viewer::data::model::{ExposureRecord, MetricKind};
use exposure_viewer::state::AppState;

/// Horizontal offset of each metric's bar within a record's slot.
const BAR_OFFSET: f64 = 0.18;
const BAR_WIDTH: f64 = 0.34;

// ---------------------------------------------------------------------------
// Comparison chart (compare mode)
// ---------------------------------------------------------------------------

/// Grouped bar chart: one slot per compared record, replacement risk on the
/// left, enhancement on the right, each bar coloured from its own ramp.
pub fn comparison_chart(ui: &mut Ui, state: &AppState, records: &[ExposureRecord]) {
    let charts: Vec<BarChart> = MetricKind::ALL
        .into_iter()
        .map(|metric| {
            let offset = match metric {
                MetricKind::Negative => -BAR_OFFSET,
                MetricKind::Positive => BAR_OFFSET,
            };
            let bars = records
                .iter()
                .enumerate()
                .map(|(i, rec)| {
                    let value = rec.metric(metric);
                    Bar::new(i as f64 + offset, f64::from(value))
                        .width(BAR_WIDTH)
                        .name(&rec.name)
                        .fill(state.color_for(value, Some(metric)).color())
                })
                .collect();
            BarChart::new(bars)
                .name(metric.label())
                .color(color_for(100, metric).color())
        })
        .collect();

    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();

    Plot::new("comparison_chart")
        .legend(Legend::default())
        .height(220.0)
        .include_y(0.0)
        .include_y(100.0)
        .y_axis_label("Exposure %")
        .x_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if (mark.value - slot).abs() > f64::EPSILON || slot < 0.0 {
                return String::new();
            }
            names.get(slot as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
