use anyhow::Context;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use exposure_viewer::color::ColorRamp;
use exposure_viewer::data::filter::{CategoryFilter, SortMode};
use exposure_viewer::data::loader::load_catalog;
use exposure_viewer::data::model::{DatasetKind, MetricKind};
use exposure_viewer::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – view options
// ---------------------------------------------------------------------------

/// Render the left options panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("AI Exposure");
    ui.label(format!(
        "Explore how different {} are impacted by AI",
        state.options().dataset.noun()
    ));
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- View by ----
            ui.strong("View By");
            let mut dataset = state.options().dataset;
            let picked = ui
                .horizontal(|ui: &mut Ui| {
                    DatasetKind::ALL
                        .into_iter()
                        .map(|kind| ui.radio_value(&mut dataset, kind, kind.label()).clicked())
                        .fold(false, |any, clicked| any | clicked)
                })
                .inner;
            if picked {
                state.set_dataset_kind(dataset);
            }
            ui.add_space(6.0);

            // ---- Exposure type ----
            ui.strong("Exposure Type");
            let mut metric = state.options().metric;
            ui.horizontal(|ui: &mut Ui| {
                for kind in MetricKind::ALL {
                    ui.radio_value(&mut metric, kind, kind.label());
                }
            });
            if metric != state.options().metric {
                state.set_metric_kind(metric);
            }
            ui.add_space(6.0);

            // ---- Sort ----
            ui.strong("Sort By");
            let current_sort = state.options().sort;
            egui::ComboBox::from_id_salt("sort_by")
                .selected_text(current_sort.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in SortMode::ALL {
                        if ui
                            .selectable_label(current_sort == mode, mode.label())
                            .clicked()
                        {
                            state.set_sort_mode(mode);
                        }
                    }
                });
            ui.add_space(6.0);

            // ---- Category ----
            ui.strong("Category");
            let current_category = state.options().category.clone();
            let labels: Vec<String> = state.categories().labels().map(String::from).collect();
            egui::ComboBox::from_id_salt("category")
                .selected_text(current_category.label())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(current_category == CategoryFilter::All, "All")
                        .clicked()
                    {
                        state.set_category_filter(CategoryFilter::All);
                    }
                    for label in labels {
                        let filter = CategoryFilter::Category(label);
                        if ui
                            .selectable_label(current_category == filter, filter.label())
                            .clicked()
                        {
                            state.set_category_filter(filter);
                        }
                    }
                });
            ui.add_space(6.0);

            // ---- Search ----
            ui.strong("Search");
            let mut search = state.options().search.clone();
            let hint = format!("🔍 Search {}…", state.options().dataset.noun());
            let response = ui.add(egui::TextEdit::singleline(&mut search).hint_text(hint));
            if response.changed() {
                state.set_search_text(search);
            }
            ui.separator();

            // ---- Legend ----
            ui.strong(format!("Legend – {}", state.options().metric.label()));
            for (range, color) in ColorRamp::for_metric(state.options().metric).legend_entries() {
                ui.horizontal(|ui: &mut Ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, color);
                    ui.label(range);
                });
            }
            ui.separator();

            about(ui);
        });
}

fn about(ui: &mut Ui) {
    egui::CollapsingHeader::new(RichText::new("About This Visualization").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label("This tool shows two types of AI exposure:");
            ui.label(
                RichText::new("Replacement Risk")
                    .strong()
                    .color(Color32::from_rgb(0xdc, 0x26, 0x26)),
            );
            ui.label("The percentage of tasks that could potentially be replaced by AI.");
            ui.label(
                RichText::new("Enhancement Potential")
                    .strong()
                    .color(Color32::from_rgb(0x05, 0x96, 0x69)),
            );
            ui.label("The potential for AI to enhance productivity and capabilities in this field.");
            ui.label(
                RichText::new("Note: This is simulated data for demonstration purposes.")
                    .small()
                    .weak(),
            );
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open catalog…").clicked() {
                open_catalog_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} of {} {} shown",
            state.visible_indices().len(),
            state.dataset().len(),
            state.options().dataset.noun()
        ));

        ui.separator();

        let compare = state.display().is_compare();
        let label = if compare {
            format!(
                "Compare ({}/{})",
                state.compared_records().len(),
                state.config().compare_capacity
            )
        } else {
            "Compare".to_string()
        };
        if ui.selectable_label(compare, label).clicked() {
            state.set_compare_mode(!compare);
        }

        if !state.display().is_empty() && ui.small_button("Clear selection").clicked() {
            state.clear_selection();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_catalog_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open exposure catalog")
        .add_filter("Catalog JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        let loaded = load_catalog(&path)
            .with_context(|| format!("loading catalog from {}", path.display()));
        match loaded {
            Ok(catalog) => {
                log::info!("Loaded catalog from {}", path.display());
                state.replace_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
