use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use exposure_viewer::data::model::{DatasetKind, ExposureRecord, MetricKind};
use exposure_viewer::state::AppState;

use super::plot;

// ---------------------------------------------------------------------------
// Right side panel – detail or comparison
// ---------------------------------------------------------------------------

pub fn detail_panel(ui: &mut Ui, state: &mut AppState) {
    if state.display().is_compare() {
        compare_view(ui, state);
    } else {
        detail_view(ui, state);
    }
}

fn detail_view(ui: &mut Ui, state: &mut AppState) {
    let Some(record) = state.selected_record().cloned() else {
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.heading(&record.name);
        if ui.small_button("✕").on_hover_text("Close").clicked() {
            state.clear_selection();
        }
    });
    ui.separator();

    for metric in MetricKind::ALL {
        metric_line(ui, state, &record, metric);
    }

    if state.options().dataset == DatasetKind::Majors {
        ui.add_space(8.0);
        ui.strong("Related occupations");
        let related = state.related_occupations(&record.name);
        if related.is_empty() {
            ui.label(RichText::new("None listed").weak());
        }
        ScrollArea::vertical().show(ui, |ui: &mut Ui| {
            for occupation in related {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(&occupation.name);
                    for metric in MetricKind::ALL {
                        let value = occupation.metric(metric);
                        let color = state.color_for(value, Some(metric)).color();
                        ui.label(RichText::new(format!("{value}%")).color(color).strong());
                    }
                });
            }
        });
    }
}

/// Score line coloured with the metric's own ramp, independent of the global metric.
fn metric_line(ui: &mut Ui, state: &AppState, record: &ExposureRecord, metric: MetricKind) {
    let value = record.metric(metric);
    let color = state.color_for(value, Some(metric)).color();
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{}:", metric.label()));
        ui.label(RichText::new(format!("{value}%")).color(color).strong());
    });
    ui.add(
        egui::ProgressBar::new(f32::from(value) / 100.0)
            .fill(color)
            .desired_height(10.0),
    );
}

fn compare_view(ui: &mut Ui, state: &AppState) {
    let records: Vec<ExposureRecord> =
        state.compared_records().into_iter().cloned().collect();
    let capacity = state.config().compare_capacity;

    ui.heading("Comparison");
    ui.label(format!(
        "{} of {capacity} selected. Click rows to add or remove.",
        records.len()
    ));
    ui.separator();

    if records.is_empty() {
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(110.0))
        .columns(Column::remainder().at_least(60.0), records.len())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Metric");
            });
            for rec in &records {
                header.col(|ui: &mut Ui| {
                    ui.strong(&rec.name);
                });
            }
        })
        .body(|mut body| {
            for metric in MetricKind::ALL {
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(metric.label());
                    });
                    for rec in &records {
                        let value = rec.metric(metric);
                        let color = state.color_for(value, Some(metric)).color();
                        row.col(|ui: &mut Ui| {
                            ui.label(RichText::new(format!("{value}%")).color(color).strong());
                        });
                    }
                });
            }
        });

    ui.add_space(8.0);
    plot::comparison_chart(ui, state, &records);
}
