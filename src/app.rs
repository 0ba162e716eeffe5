use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::cache::load_data;
use crate::state::AppState;
use crate::ui::{metrics, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            state: AppState::new(load_data(&config.generator)),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, table, chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Interactive Data Dashboard");
            ui.label("Use the filters in the sidebar to explore the data.");
            ui.add_space(8.0);

            metrics::metric_row(ui, &self.state.summary);
            ui.separator();

            ui.strong("Filtered data");
            let table_height = (ui.available_height() * 0.4).max(120.0);
            ui.push_id("filtered_table", |ui| {
                table::filtered_table(ui, &self.state, table_height);
            });
            ui.separator();

            ui.strong("Value over time");
            plot::value_chart(ui, &self.state);
        });
    }
}
