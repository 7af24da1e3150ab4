mod app;
mod color;
mod data;
mod kpi;
mod state;
mod ui;

use app::KpiComparatorApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is required; without it there is nothing to compare.
    let path = data::loader::resolve_dataset_path()?;
    let dataset = data::loader::load_file(&path)?;
    log::info!(
        "Loaded {} records ({} teams, {} seasons) from {}",
        dataset.len(),
        dataset.list_teams().len(),
        dataset.list_years().len(),
        path.display()
    );
    if dataset.is_empty() {
        log::warn!("{} has no rows; nothing can be compared", path.display());
    }
    if dataset.duplicate_count() > 0 {
        log::warn!(
            "{} duplicate team/season rows ignored",
            dataset.duplicate_count()
        );
    }
    let state = AppState::new(dataset, path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_maximized(true),
        ..Default::default()
    };

    eframe::run_native(
        "Team Offensive KPI Comparator",
        options,
        Box::new(move |_cc| Ok(Box::new(KpiComparatorApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
