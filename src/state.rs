use std::sync::Arc;

use chrono::NaiveDate;

use crate::color::CategoryColors;
use crate::data::filter::{FilterSpec, FilteredSubset, filter};
use crate::data::metrics::{MetricsSummary, summarize};
use crate::data::model::{Category, Dataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Generated dataset, shared with the process-wide cache.
    pub dataset: Arc<Dataset>,

    /// Current sidebar selection.
    pub filter: FilterSpec,

    /// Records passing `filter` (cached).
    pub subset: FilteredSubset,

    /// Metrics over `subset` (cached).
    pub summary: MetricsSummary,

    /// Colours for category labels.
    pub colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start with every category and the full date range selected.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let filter = FilterSpec::all(&dataset);
        let colors = CategoryColors::new(&dataset.categories);
        let mut state = Self {
            dataset,
            filter,
            subset: FilteredSubset::default(),
            summary: MetricsSummary::EMPTY,
            colors,
            status_message: None,
        };
        state.recompute();
        state
    }

    /// Re-run filter and aggregation after any selection change.
    pub fn recompute(&mut self) {
        self.subset = filter(&self.dataset, &self.filter);
        self.summary = summarize(&self.subset);
        log::debug!(
            "Filter {:?} kept {} of {} records",
            self.filter,
            self.subset.len(),
            self.dataset.len()
        );
    }

    /// Toggle a single category in the selection.
    pub fn toggle_category(&mut self, category: &Category) {
        let selected = &mut self.filter.selected_categories;
        if !selected.remove(category) {
            selected.insert(category.clone());
        }
        self.recompute();
    }

    /// Select all categories present in the dataset.
    pub fn select_all_categories(&mut self) {
        self.filter.selected_categories = self.dataset.categories.clone();
        self.recompute();
    }

    /// Deselect every category.
    pub fn select_no_categories(&mut self) {
        self.filter.selected_categories.clear();
        self.recompute();
    }

    /// Set the start date, clamped into the dataset's date range.
    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.filter.start_date = self.clamp_date(date);
        self.recompute();
    }

    /// Set the end date, clamped into the dataset's date range.
    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.filter.end_date = self.clamp_date(date);
        self.recompute();
    }

    fn clamp_date(&self, date: NaiveDate) -> NaiveDate {
        match self.dataset.date_bounds() {
            Some((min, max)) => date.clamp(min, max),
            None => date,
        }
    }
}
