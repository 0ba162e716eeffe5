//! Write a seeded synthetic dataset to CSV.
//!
//! Usage: `generate_sample [OUTPUT] [SEED]` (defaults: `sample_data.csv`, 42).

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use data_dash::config::DashboardConfig;
use data_dash::data::export::save_csv;
use data_dash::data::filter::{FilterSpec, filter};
use data_dash::data::generator::generate_with;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output_path = PathBuf::from(args.next().unwrap_or_else(|| "sample_data.csv".into()));
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid seed '{s}'"))?,
        None => 42,
    };

    let config = DashboardConfig::from_env()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let dataset = generate_with(&config.generator, &mut rng);
    let everything = filter(&dataset, &FilterSpec::all(&dataset));

    save_csv(&everything, &output_path)?;

    println!(
        "Wrote {} records (seed {seed}) to {}",
        everything.len(),
        output_path.display()
    );
    Ok(())
}
