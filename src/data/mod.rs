/// Data layer: generation, caching, filtering and aggregation.
///
/// Architecture:
/// ```text
///   GeneratorParams
///        │
///        ▼
///   ┌──────────────┐
///   │ cache        │  memoized generate → Arc<Dataset>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ filter       │  FilterSpec (categories, date range) → FilteredSubset
///   └──────────────┘
///        │
///        ├──────────────► metrics   count / mean / max
///        └──────────────► export    CSV
/// ```

pub mod cache;
pub mod export;
pub mod filter;
pub mod generator;
pub mod metrics;
pub mod model;
