mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use app::CachePlotApp;
use eframe::egui;
use state::AppState;

/// How many `dataN.csv` benchmark repetitions to average.
const DATASET_COUNT: usize = 3;

fn main() -> Result<()> {
    env_logger::init();

    // Load and average before the window opens; a bad run aborts here.
    let data_dir = PathBuf::from(".");
    let run = data::loader::load_run(&data_dir, DATASET_COUNT)
        .context("loading benchmark data")?;

    let mut state = AppState::new(data_dir, DATASET_COUNT);
    state.set_run(run);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cacheplot – Layout Benchmark Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(CachePlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("eframe exited with an error: {e}"))
}
