use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::series_color;
use crate::data::model::CACHE_REFERENCE_LINES;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series toggles
// ---------------------------------------------------------------------------

/// Render the left panel with one checkbox per averaged series.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    if state.run.is_none() {
        ui.label("No benchmark data loaded.");
        return;
    }

    let total_series = state.series.len();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.set_all_series(true);
                }
                if ui.small_button("None").clicked() {
                    state.set_all_series(false);
                }
            });

            // Snapshot so we can mutate state from inside the loop.
            let series: Vec<(usize, &str, bool)> = state
                .series
                .iter()
                .map(|s| (s.row, s.label, s.enabled))
                .collect();

            for (row, label, enabled) in series {
                let text = RichText::new(label).color(series_color(row, total_series));
                let mut checked = enabled;
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_series(row);
                }
            }

            ui.separator();

            ui.strong("Reference lines");
            for rl in &CACHE_REFERENCE_LINES {
                let (r, g, b) = rl.rgb;
                ui.label(
                    RichText::new(format!("{}  ({} bytes)", rl.label, rl.x as u64))
                        .color(Color32::from_rgb(r, g, b)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_directory_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(run) = &state.run {
            let enabled = state.series.iter().filter(|s| s.enabled).count();
            ui.label(format!(
                "{} datasets averaged, {} of {} series shown",
                run.dataset_count,
                enabled,
                run.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Directory dialog
// ---------------------------------------------------------------------------

pub fn open_directory_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open benchmark data directory")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(dir) = dir {
        state.load_from(dir);
    }
}
