/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  unicorns.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize columns → StartupDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ StartupDataset  │  Vec<StartupRecord>, widget indices
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterCriteria → subset indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  subset → AggregateResult (KPIs, rankings, tokens)
///   └───────────┘
/// ```
///
/// The layer is pure and UI-independent: the dataset is immutable after
/// load, and (dataset, criteria) → AggregateResult is a plain function the
/// UI shell re-invokes on every interaction.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
