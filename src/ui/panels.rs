use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export;
use crate::data::samples;
use crate::state::{Action, AppState, Overlay, PlotKind};

// ---------------------------------------------------------------------------
// Left side panel – column selection, range, overlays, statistics
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Columns");
            ui.separator();

            if let Some(table) = &state.table {
                let names: Vec<String> = table
                    .header
                    .iter()
                    .enumerate()
                    .map(|(i, h)| format!("{}: {h}", i + 1))
                    .collect();
                ui.label(RichText::new(names.join("   ")).weak());
            } else {
                ui.label("No header");
            }

            let mut actions = Vec::new();

            if let Some(text) = text_field(ui, "X column", &state.x_column, "1") {
                actions.push(Action::SetXColumn(text));
            }
            if let Some(text) = text_field(ui, "Y column", &state.y_column, "2") {
                actions.push(Action::SetYColumn(text));
            }
            if let Some(text) = text_field(ui, "X label", &state.x_label, &state.x_axis_label()) {
                actions.push(Action::SetXLabel(text));
            }
            if let Some(text) = text_field(ui, "Y label", &state.y_label, &state.y_axis_label()) {
                actions.push(Action::SetYLabel(text));
            }

            ui.add_space(8.0);
            ui.heading("X range");
            ui.separator();

            let (lo_hint, hi_hint) = match state.original_x_range {
                Some((lo, hi)) => (format!("{lo}"), format!("{hi}")),
                None => ("-".to_string(), "-".to_string()),
            };
            if let Some(text) = text_field(ui, "X min", &state.x_min, &lo_hint) {
                actions.push(Action::SetXMin(text));
            }
            if let Some(text) = text_field(ui, "X max", &state.x_max, &hi_hint) {
                actions.push(Action::SetXMax(text));
            }
            if ui.small_button("Full range").clicked() {
                actions.push(Action::ResetRange);
            }

            ui.add_space(8.0);
            ui.heading("Plot");
            ui.separator();

            ui.horizontal(|ui: &mut Ui| {
                for (kind, label) in [(PlotKind::Line, "Line"), (PlotKind::Scatter, "Scatter")] {
                    if ui.radio(state.plot_kind == kind, label).clicked() {
                        actions.push(Action::SetPlotKind(kind));
                    }
                }
            });

            for (overlay, label) in [
                (Overlay::RegressionLine, "Regression line"),
                (Overlay::MeanLine, "Mean line"),
                (Overlay::ErrorBars, "Error bars"),
            ] {
                let mut checked = state.overlays.is_on(overlay);
                if ui.checkbox(&mut checked, label).changed() {
                    actions.push(Action::ToggleOverlay(overlay));
                }
            }

            if let Some(text) = text_field(ui, "Confidence (σ)", &state.confidence, "1.0") {
                actions.push(Action::SetConfidence(text));
            }

            for action in actions {
                state.apply(action);
            }

            ui.add_space(8.0);
            ui.heading("Statistics");
            ui.separator();
            statistics_grid(ui, state);
        });
}

/// A labelled single-line text box. Returns the new text when edited.
fn text_field(ui: &mut Ui, label: &str, value: &str, hint: &str) -> Option<String> {
    let mut text = value.to_string();
    let mut changed = false;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        changed = ui
            .add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text(hint)
                    .desired_width(90.0),
            )
            .changed();
    });
    changed.then_some(text)
}

fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "undefined".to_string(),
    }
}

fn statistics_grid(ui: &mut Ui, state: &AppState) {
    let Some(stats) = &state.statistics else {
        ui.label("Rows: -");
        return;
    };

    egui::Grid::new("statistics")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            let total = state.table.as_ref().map_or(0, |t| t.len());
            let rows: [(&str, String); 11] = [
                ("Rows", format!("{} of {total}", stats.count)),
                ("X min", format!("{:.4}", stats.x_min)),
                ("X max", format!("{:.4}", stats.x_max)),
                ("Mean x", format!("{:.4}", stats.mean_x)),
                ("Mean y", format!("{:.4}", stats.mean_y)),
                ("σ x", format!("{:.4}", stats.std_dev_x)),
                ("σ y", format!("{:.4}", stats.std_dev_y)),
                ("r", fmt_value(stats.correlation)),
                ("Slope", fmt_value(stats.regression.map(|r| r.slope))),
                ("Intercept", fmt_value(stats.regression.map(|r| r.intercept))),
                ("Error bar ±", fmt_value(state.error_bar_half_width())),
            ];
            for (name, value) in rows {
                ui.label(name);
                ui.monospace(value);
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar. Returns a path the user picked to open.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) -> Option<PathBuf> {
    let mut picked = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                picked = open_file_dialog();
                ui.close_menu();
            }
            ui.separator();
            let can_export = state.statistics.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export points as CSV…"))
                .clicked()
            {
                export_points_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(can_export, egui::Button::new("Export statistics as JSON…"))
                .clicked()
            {
                export_statistics_dialog(state);
                ui.close_menu();
            }
        });

        ui.menu_button("Samples", |ui: &mut Ui| {
            for sample in &samples::ALL {
                if ui.button(sample.name).clicked() {
                    state.load_sample(sample);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        match (&state.source, &state.table) {
            (Some(source), Some(table)) => {
                ui.label(format!(
                    "{source}: {} rows, {} columns ({} delimiter), {} visible",
                    table.len(),
                    table.column_count(),
                    table.delimiter,
                    state.visible.len()
                ));
            }
            _ => {
                ui.label("Rows: -");
            }
        }

        if state.loading {
            ui.spinner();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    picked
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open data file")
        .add_filter("Text data", &["csv", "txt", "dat", "tsv"])
        .add_filter("All files", &["*"])
        .pick_file()
}

fn export_points_dialog(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export points")
        .set_file_name("points.csv")
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };

    let result = export::save_points_csv(
        &path,
        &state.x_axis_label(),
        &state.y_axis_label(),
        &state.visible,
    );
    report_export(state, "points", &path, result);
}

fn export_statistics_dialog(state: &mut AppState) {
    let Some(stats) = state.statistics.clone() else {
        return;
    };
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export statistics")
        .set_file_name("statistics.json")
        .add_filter("JSON", &["json"])
        .save_file()
    else {
        return;
    };

    let result = export::save_statistics_json(&path, &stats);
    report_export(state, "statistics", &path, result);
}

fn report_export(state: &mut AppState, what: &str, path: &std::path::Path, result: anyhow::Result<()>) {
    match result {
        Ok(()) => {
            log::info!("Exported {what} to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export {what}: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
