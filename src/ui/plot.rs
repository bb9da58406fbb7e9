use eframe::egui::{Color32, Ui};
use egui_plot::{Line, LineStyle, Plot, PlotPoints, VLine};

use crate::color::series_color;
use crate::data::model::CACHE_REFERENCE_LINES;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Timing plot (central panel)
// ---------------------------------------------------------------------------

/// Pair one averaged row with the shared X axis, one point per sample.
/// Values pass through unchanged; extra entries on either side are dropped.
fn series_points(x_axis: &[f64], row: &[f64]) -> Vec<[f64; 2]> {
    x_axis
        .iter()
        .zip(row.iter())
        .map(|(&xi, &yi)| [xi, yi])
        .collect()
}

/// Render the averaged timing curves in the central panel.
pub fn timing_plot(ui: &mut Ui, state: &AppState) {
    let run = match &state.run {
        Some(run) => run,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a benchmark directory to view timings  (File → Open…)");
            });
            return;
        }
    };

    let total_series = state.series.len();

    Plot::new("timing_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Bytes of data iterated upon")
        .y_axis_label("ns (less is better)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for cfg in &state.series {
                if !cfg.enabled {
                    continue;
                }
                // A run with fewer rows than the config expects just plots less.
                let Some(row) = run.rows.get(cfg.row) else {
                    continue;
                };

                let line = Line::new(PlotPoints::from(series_points(&run.x_axis, row)))
                    .name(cfg.label)
                    .color(series_color(cfg.row, total_series))
                    .width(1.5);

                plot_ui.line(line);
            }

            for rl in &CACHE_REFERENCE_LINES {
                let (r, g, b) = rl.rgb;
                plot_ui.vline(
                    VLine::new(rl.x)
                        .name(rl.label)
                        .color(Color32::from_rgb(r, g, b))
                        .style(LineStyle::Dashed { length: 8.0 })
                        .width(1.0),
                );
            }
        });
}
