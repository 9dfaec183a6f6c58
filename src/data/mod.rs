/// Data layer: core types, loading, derived metrics, filtering and export.
///
/// Architecture:
/// ```text
///   engagement .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (memoized per path)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  derive   │  revenue_generated = ad_spend * (1 + roi)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  platform / content type / year → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered view → .csv
///   └──────────┘
/// ```

pub mod derive;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
