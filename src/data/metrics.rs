use std::fmt;

use super::filter::FilteredSubset;

/// Count, mean and maximum of the value column.
///
/// `mean_value` and `max_value` are `NaN` when `count == 0`; use
/// [`MetricsSummary::mean`] / [`MetricsSummary::max`] to read them safely.
#[derive(Debug, Clone, Copy)]
pub struct MetricsSummary {
    pub count: usize,
    pub mean_value: f64,
    pub max_value: f64,
}

impl MetricsSummary {
    pub const EMPTY: MetricsSummary = MetricsSummary {
        count: 0,
        mean_value: f64::NAN,
        max_value: f64::NAN,
    };

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean_value)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max_value)
    }

    /// Mean rendered for display: two decimals, or "no data".
    pub fn mean_label(&self) -> String {
        Metric(self.mean()).to_string()
    }

    /// Max rendered for display: two decimals, or "no data".
    pub fn max_label(&self) -> String {
        Metric(self.max()).to_string()
    }
}

impl Default for MetricsSummary {
    fn default() -> Self {
        Self::EMPTY
    }
}

struct Metric(Option<f64>);

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.2}"),
            None => write!(f, "no data"),
        }
    }
}

/// Aggregate the value column of `subset`. Never fails on an empty subset.
pub fn summarize(subset: &FilteredSubset) -> MetricsSummary {
    let count = subset.len();
    if count == 0 {
        return MetricsSummary::EMPTY;
    }
    let sum: f64 = subset.values().sum();
    let max_value = subset.values().fold(f64::NEG_INFINITY, f64::max);
    MetricsSummary {
        count,
        mean_value: sum / count as f64,
        max_value,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::Record;

    fn subset(values: &[f64]) -> FilteredSubset {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        FilteredSubset {
            records: values
                .iter()
                .zip(start.iter_days())
                .map(|(&v, d)| Record::new("A", v, d))
                .collect(),
        }
    }

    #[test]
    fn empty_subset_gives_sentinels() {
        let m = summarize(&FilteredSubset::default());
        assert_eq!(m.count, 0);
        assert!(m.mean_value.is_nan());
        assert!(m.max_value.is_nan());
        assert_eq!(m.mean(), None);
        assert_eq!(m.max(), None);
        assert_eq!(m.mean_label(), "no data");
        assert_eq!(m.max_label(), "no data");
    }

    #[test]
    fn mean_and_max_over_values() {
        let m = summarize(&subset(&[1.0, 3.0]));
        assert_eq!(m.count, 2);
        assert!((m.mean_value - 2.0).abs() < 1e-12);
        assert_eq!(m.max_value, 3.0);
    }

    #[test]
    fn negative_values_keep_true_maximum() {
        let m = summarize(&subset(&[-4.5, -1.25, -3.0]));
        assert_eq!(m.max(), Some(-1.25));
        let expected = (-4.5 - 1.25 - 3.0) / 3.0;
        assert!((m.mean_value - expected).abs() < 1e-12);
    }

    #[test]
    fn labels_use_two_decimals() {
        let m = summarize(&subset(&[1.0, 2.0, 4.0]));
        assert_eq!(m.mean_label(), "2.33");
        assert_eq!(m.max_label(), "4.00");
    }
}
