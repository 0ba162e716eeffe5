use std::sync::{Arc, Mutex};

use super::generator::{GeneratorParams, generate_with};
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Single-entry memoization of the generated dataset
// ---------------------------------------------------------------------------

/// Holds at most one dataset, keyed by the parameters it was generated from.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(GeneratorParams, Arc<Dataset>)>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Return the cached dataset if `params` match the key, otherwise run
    /// `generate` and replace the entry.
    pub fn get_or_generate<F>(&mut self, params: &GeneratorParams, generate: F) -> Arc<Dataset>
    where
        F: FnOnce(&GeneratorParams) -> Dataset,
    {
        if let Some((key, dataset)) = &self.entry {
            if key == params {
                log::debug!("Dataset cache hit ({} rows)", dataset.len());
                return Arc::clone(dataset);
            }
        }
        log::debug!("Dataset cache miss, generating");
        let dataset = Arc::new(generate(params));
        self.entry = Some((params.clone(), Arc::clone(&dataset)));
        dataset
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

static CACHE: Mutex<DatasetCache> = Mutex::new(DatasetCache::new());

/// Process-wide read-through cache around the generator.
pub fn load_data(params: &GeneratorParams) -> Arc<Dataset> {
    let mut cache = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache.get_or_generate(params, |p| generate_with(p, &mut rand::thread_rng()))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn seeded(p: &GeneratorParams) -> Dataset {
        generate_with(p, &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn same_params_hit_the_cache() {
        let mut cache = DatasetCache::new();
        let calls = Cell::new(0);
        let params = GeneratorParams::default();

        let first = cache.get_or_generate(&params, |p| {
            calls.set(calls.get() + 1);
            seeded(p)
        });
        let second = cache.get_or_generate(&params, |p| {
            calls.set(calls.get() + 1);
            seeded(p)
        });

        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn changed_params_regenerate() {
        let mut cache = DatasetCache::new();
        assert!(cache.is_empty());
        let params = GeneratorParams::default();
        let first = cache.get_or_generate(&params, seeded);

        let smaller = GeneratorParams {
            row_count: 10,
            ..params
        };
        let second = cache.get_or_generate(&smaller, seeded);

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 10);
        assert!(!cache.is_empty());
    }

    #[test]
    fn load_data_is_memoized_process_wide() {
        let params = GeneratorParams {
            row_count: 20,
            ..GeneratorParams::default()
        };
        let a = load_data(&params);
        let b = load_data(&params);
        assert_eq!(a.len(), 20);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
