use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::extract::parse_number;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bottom panel – preamble and raw rows of the loaded table
// ---------------------------------------------------------------------------

/// Show the metadata preamble and the raw table. Non-numeric cells in the
/// selected columns are highlighted since their rows are left out.
pub fn data_preview(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        ui.label("No header");
        return;
    };

    if !table.metadata.is_empty() {
        egui::CollapsingHeader::new(format!("Metadata ({} lines)", table.metadata.len()))
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                for line in &table.metadata {
                    ui.monospace(line);
                }
            });
    }
    if table.skipped > 0 {
        ui.label(RichText::new(format!("{} malformed lines skipped", table.skipped)).weak());
    }

    let selected = state.selected_columns();
    let is_selected = |col: usize| selected.is_some_and(|(x, y)| col == x || col == y);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(40.0))
        .columns(Column::auto().at_least(70.0), table.column_count())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("#");
            });
            for (i, name) in table.header.iter().enumerate() {
                header.col(|ui: &mut Ui| {
                    let text = RichText::new(format!("{} {name}", i + 1)).strong();
                    ui.label(if is_selected(i) { text.underline() } else { text });
                });
            }
        })
        .body(|body| {
            body.rows(18.0, table.len(), |mut row| {
                let index = row.index();
                row.col(|ui: &mut Ui| {
                    ui.label(RichText::new((index + 1).to_string()).weak());
                });
                for (col, cell) in table.rows[index].iter().enumerate() {
                    row.col(|ui: &mut Ui| {
                        if is_selected(col) && parse_number(cell).is_none() {
                            ui.label(RichText::new(cell).color(Color32::LIGHT_RED));
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
