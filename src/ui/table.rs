use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Filtered records as a striped, scrollable table.
pub fn filtered_table(ui: &mut Ui, state: &AppState, max_height: f32) {
    let records = &state.subset.records;
    if records.is_empty() {
        ui.weak("No records match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .max_scroll_height(max_height)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Date");
            });
            header.col(|ui| {
                ui.strong("Category");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let index = row.index();
                let record = &records[index];
                row.col(|ui| {
                    ui.label((index + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(record.date.to_string());
                });
                row.col(|ui| {
                    let color = state.colors.color_for(&record.category);
                    ui.label(RichText::new(record.category.as_str()).color(color));
                });
                row.col(|ui| {
                    ui.monospace(format!("{:.4}", record.value));
                });
            });
        });
}
