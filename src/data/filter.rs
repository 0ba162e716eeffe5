use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::{Category, Dataset, Record};

// ---------------------------------------------------------------------------
// Filter predicate: selected categories and an inclusive date range
// ---------------------------------------------------------------------------

/// User selection driving the filter.
///
/// An empty `selected_categories` set matches nothing. `start_date` after
/// `end_date` is allowed and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub selected_categories: BTreeSet<Category>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FilterSpec {
    /// Everything selected: all categories, the full date range.
    pub fn all(dataset: &Dataset) -> Self {
        let (start_date, end_date) = dataset.date_bounds().unwrap_or_default();
        FilterSpec {
            selected_categories: dataset.categories.clone(),
            start_date,
            end_date,
        }
    }

    /// Row predicate.
    pub fn matches(&self, record: &Record) -> bool {
        self.selected_categories.contains(&record.category)
            && self.start_date <= record.date
            && record.date <= self.end_date
    }
}

/// Records passing a [`FilterSpec`], in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredSubset {
    pub records: Vec<Record>,
}

impl FilteredSubset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.value)
    }
}

/// Return the records of `dataset` that pass `spec`.
pub fn filter(dataset: &Dataset, spec: &FilterSpec) -> FilteredSubset {
    if spec.selected_categories.is_empty() || spec.start_date > spec.end_date {
        return FilteredSubset::default();
    }
    FilteredSubset {
        records: dataset
            .records
            .iter()
            .filter(|r| spec.matches(r))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Days;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::data::generator::{GeneratorParams, generate_with};

    fn day(n: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + Days::new(n)
    }

    fn three_rows() -> Dataset {
        Dataset::from_records(vec![
            Record::new("A", 1.0, day(0)),
            Record::new("B", 2.0, day(1)),
            Record::new("A", 3.0, day(2)),
        ])
    }

    fn spec(cats: &[&str], start: u64, end: u64) -> FilterSpec {
        FilterSpec {
            selected_categories: cats.iter().map(|c| Category::from(*c)).collect(),
            start_date: day(start),
            end_date: day(end),
        }
    }

    #[test]
    fn selects_category_within_range() {
        let subset = filter(&three_rows(), &spec(&["A"], 0, 2));
        assert_eq!(
            subset.records,
            vec![Record::new("A", 1.0, day(0)), Record::new("A", 3.0, day(2))]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let subset = filter(&three_rows(), &spec(&["A", "B"], 1, 1));
        assert_eq!(subset.records, vec![Record::new("B", 2.0, day(1))]);
    }

    #[test]
    fn empty_selection_matches_nothing() {
        assert!(filter(&three_rows(), &spec(&[], 0, 2)).is_empty());
    }

    #[test]
    fn inverted_range_matches_nothing() {
        assert!(filter(&three_rows(), &spec(&["A", "B"], 2, 0)).is_empty());
    }

    #[test]
    fn range_outside_data_matches_nothing() {
        assert!(filter(&three_rows(), &spec(&["A", "B"], 5, 6)).is_empty());
    }

    #[test]
    fn all_selects_every_record() {
        let ds = three_rows();
        let subset = filter(&ds, &FilterSpec::all(&ds));
        assert_eq!(subset.records, ds.records);
    }

    #[test]
    fn generated_data_is_sound_complete_and_ordered() {
        let ds = generate_with(&GeneratorParams::default(), &mut StdRng::seed_from_u64(11));
        let f = spec(&["A", "C"], 10, 60);
        let subset = filter(&ds, &f);

        assert!(subset.records.iter().all(|r| f.matches(r)));
        let expected: Vec<Record> = ds.records.iter().filter(|r| f.matches(r)).cloned().collect();
        assert_eq!(subset.records, expected);
        assert!(subset.records.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn filtering_is_idempotent_and_leaves_input_untouched() {
        let ds = three_rows();
        let before = ds.clone();
        let f = spec(&["B"], 0, 2);
        assert_eq!(filter(&ds, &f), filter(&ds, &f));
        assert_eq!(ds, before);
    }
}
