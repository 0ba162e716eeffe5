use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_empty() {
        ui.label("Dataset is empty.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            category_filter(ui, state);
            ui.separator();
            date_filter(ui, state);
        });
}

fn category_filter(ui: &mut Ui, state: &mut AppState) {
    let categories = state.dataset.categories.clone();
    let n_selected = state.filter.selected_categories.len();
    ui.strong(format!("Categories  ({n_selected}/{})", categories.len()));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_categories();
        }
        if ui.small_button("None").clicked() {
            state.select_no_categories();
        }
    });

    for category in &categories {
        let mut checked = state.filter.selected_categories.contains(category);
        let text = RichText::new(category.as_str()).color(state.colors.color_for(category));
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_category(category);
        }
    }
}

fn date_filter(ui: &mut Ui, state: &mut AppState) {
    let Some((min, max)) = state.dataset.date_bounds() else {
        return;
    };

    ui.strong("Start date");
    let mut start = state.filter.start_date;
    ui.add(DatePickerButton::new(&mut start).id_salt("start_date"));
    if start != state.filter.start_date {
        state.set_start_date(start);
    }

    ui.add_space(4.0);
    ui.strong("End date");
    let mut end = state.filter.end_date;
    ui.add(DatePickerButton::new(&mut end).id_salt("end_date"));
    if end != state.filter.end_date {
        state.set_end_date(end);
    }

    ui.add_space(4.0);
    ui.weak(format!("Data covers {min} to {max}"));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Save filtered CSV…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records, {} shown",
            state.dataset.len(),
            state.subset.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save filtered data")
        .add_filter("CSV", &["csv"])
        .set_file_name("filtered_data.csv")
        .save_file();

    if let Some(path) = file {
        match crate::data::export::save_csv(&state.subset, &path) {
            Ok(()) => {
                log::info!("Saved {} records to {}", state.subset.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to save file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
