use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Value-over-time chart (central panel)
// ---------------------------------------------------------------------------

/// Plot x coordinate for a date: days since 0001-01-01.
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Inverse of [`date_to_x`], rounding to the nearest day.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x.abs() > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

fn format_x(x: f64) -> String {
    x_to_date(x).map(|d| d.to_string()).unwrap_or_default()
}

/// Render the filtered values as a single line ordered by date.
pub fn value_chart(ui: &mut Ui, state: &AppState) {
    let points: PlotPoints = state
        .subset
        .records
        .iter()
        .map(|r| [date_to_x(r.date), r.value])
        .collect();

    Plot::new("value_chart")
        .x_axis_label("Date")
        .y_axis_label("Value")
        .x_axis_formatter(|mark, _range| format_x(mark.value))
        .label_formatter(|_name, point| format!("{}\n{:.2}", format_x(point.x), point.y))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points)
                .name("Value")
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);
        });
}
