use std::path::PathBuf;

use crate::data::loader::load_run;
use crate::data::model::{default_series, AveragedRun, SeriesConfig};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Averaged benchmark run (None until a directory loads successfully).
    pub run: Option<AveragedRun>,

    /// Row index → label → enabled, for every series the benchmark emits.
    pub series: Vec<SeriesConfig>,

    /// Directory the current run was loaded from.
    pub data_dir: PathBuf,

    /// How many `dataN.csv` repetitions to average.
    pub dataset_count: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, dataset_count: usize) -> Self {
        Self {
            run: None,
            series: default_series(),
            data_dir,
            dataset_count,
            status_message: None,
        }
    }

    /// Ingest a freshly averaged run.
    pub fn set_run(&mut self, run: AveragedRun) {
        log::info!(
            "Averaged {} datasets into {} series of {} points",
            run.dataset_count,
            run.len(),
            run.x_axis.len()
        );
        self.run = Some(run);
        self.status_message = None;
    }

    /// Load `data1.csv` … from `dir` and install the result. Failures keep
    /// the previous run and surface in the status line.
    pub fn load_from(&mut self, dir: PathBuf) {
        match load_run(&dir, self.dataset_count) {
            Ok(run) => {
                self.data_dir = dir;
                self.set_run(run);
            }
            Err(e) => {
                log::error!("Failed to load benchmark data: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Re-read the current directory.
    pub fn reload(&mut self) {
        let dir = self.data_dir.clone();
        self.load_from(dir);
    }

    /// Toggle whether the series for `row` is plotted.
    pub fn toggle_series(&mut self, row: usize) {
        if let Some(cfg) = self.series.iter_mut().find(|s| s.row == row) {
            cfg.enabled = !cfg.enabled;
        }
    }

    /// Enable or disable every series at once.
    pub fn set_all_series(&mut self, enabled: bool) {
        for cfg in &mut self.series {
            cfg.enabled = enabled;
        }
    }
}
