use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::model::{Category, Dataset, Record};

// ---------------------------------------------------------------------------
// Generation parameters
// ---------------------------------------------------------------------------

/// Inputs of the synthetic data generator. Also the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    pub row_count: usize,
    pub categories: Vec<Category>,
    pub start_date: NaiveDate,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            row_count: 100,
            categories: vec!["A".into(), "B".into(), "C".into()],
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Random walk generator
// ---------------------------------------------------------------------------

/// Generate `row_count` records: a uniformly drawn category, a random-walk
/// value (cumulative sum of standard-normal steps) and one date per day
/// starting at `start_date`.
pub fn generate<R: Rng + ?Sized>(
    row_count: usize,
    categories: &[Category],
    start_date: NaiveDate,
    rng: &mut R,
) -> Dataset {
    if categories.is_empty() {
        if row_count > 0 {
            log::warn!("No categories configured, generating an empty dataset");
        }
        return Dataset::default();
    }

    let mut value = 0.0;
    let records: Vec<Record> = (0..row_count)
        .map_while(|i| {
            let date = start_date.checked_add_days(Days::new(i as u64))?;
            let category = categories[rng.gen_range(0..categories.len())].clone();
            value += standard_normal(rng);
            Some(Record {
                category,
                value,
                date,
            })
        })
        .collect();

    if records.len() < row_count {
        log::warn!(
            "Date range overflowed after {} of {row_count} rows",
            records.len()
        );
    }
    log::info!("Generated {} records from {start_date}", records.len());
    Dataset::from_records(records)
}

/// Convenience wrapper taking [`GeneratorParams`].
pub fn generate_with<R: Rng + ?Sized>(params: &GeneratorParams, rng: &mut R) -> Dataset {
    generate(params.row_count, &params.categories, params.start_date, rng)
}

/// Box-Muller transform for a standard normal draw.
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-15);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
