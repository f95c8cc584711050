mod app;
mod ui;

use anyhow::{Context, Result};
use app::ExposureApp;
use eframe::egui;
use exposure_viewer::data::model::{Catalog, DatasetKind};
use exposure_viewer::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let catalog = Catalog::builtin().context("loading built-in catalog")?;
    log::info!(
        "Built-in catalog: {} occupations, {} majors",
        catalog.dataset(DatasetKind::Occupations).len(),
        catalog.dataset(DatasetKind::Majors).len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI Exposure Visualization",
        options,
        Box::new(|_cc| Ok(Box::new(ExposureApp::new(AppState::new(catalog))))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
