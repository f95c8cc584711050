use eframe::egui;

use exposure_viewer::state::{AppState, DisplayMode};

use crate::ui::{detail, panels, rows};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExposureApp {
    pub state: AppState,
}

impl ExposureApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ExposureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: view options ----
        egui::SidePanel::left("options_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: detail / comparison ----
        if !matches!(self.state.display(), DisplayMode::List) {
            egui::SidePanel::right("detail_panel")
                .default_width(340.0)
                .resizable(true)
                .show(ctx, |ui| {
                    detail::detail_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: exposure bars ----
        egui::CentralPanel::default().show(ctx, |ui| {
            rows::exposure_rows(ui, &mut self.state);
        });
    }
}
