use eframe::egui::{RichText, Ui};

use crate::data::metrics::MetricsSummary;

/// Three metric tiles side by side: count, mean and max.
pub fn metric_row(ui: &mut Ui, summary: &MetricsSummary) {
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Records", summary.count.to_string());
        metric(&mut cols[1], "Mean value", summary.mean_label());
        metric(&mut cols[2], "Max value", summary.max_label());
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.weak(label);
        ui.label(RichText::new(value).size(28.0).strong());
    });
}
