use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category – the enum-like label column
// ---------------------------------------------------------------------------

/// A category label drawn from a small fixed set (e.g. `A`, `B`, `C`).
/// Kept `Ord` so it can live in `BTreeSet` / `BTreeMap` downstream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Category(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::new(label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single generated row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub category: Category,
    pub value: f64,
    pub date: NaiveDate,
}

impl Record {
    pub fn new(category: impl Into<Category>, value: f64, date: NaiveDate) -> Self {
        Record {
            category: category.into(),
            value,
            date,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete generated table
// ---------------------------------------------------------------------------

/// All records in generation order, which is also date-ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Sorted set of categories that actually occur in `records`.
    pub categories: BTreeSet<Category>,
}

impl Dataset {
    /// Build the category index from the records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let categories = records.iter().map(|r| r.category.clone()).collect();
        Dataset {
            records,
            categories,
        }
    }

    /// First and last date, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.date, last.date))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    #[test]
    fn from_records_collects_sorted_categories() {
        let ds = Dataset::from_records(vec![
            Record::new("C", 0.5, day(1)),
            Record::new("A", 1.0, day(2)),
            Record::new("C", 2.0, day(3)),
        ]);
        let cats: Vec<&str> = ds.categories.iter().map(Category::as_str).collect();
        assert_eq!(cats, vec!["A", "C"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn date_bounds_of_empty_dataset_is_none() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.date_bounds(), None);
    }

    #[test]
    fn date_bounds_spans_first_to_last() {
        let ds = Dataset::from_records(vec![
            Record::new("A", 0.0, day(1)),
            Record::new("B", 0.0, day(2)),
        ]);
        assert_eq!(ds.date_bounds(), Some((day(1), day(2))));
    }
}
