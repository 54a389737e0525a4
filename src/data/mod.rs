/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  StartUp.csv
///       │
///       ▼
///  ┌──────────┐
///  │  loader   │  parse + normalize rows → FundingDataset (memoized)
///  └──────────┘
///       │
///       ▼
///  ┌────────────────┐
///  │ FundingDataset │  Vec<FundingRecord>, unique-value indices
///  └────────────────┘
///       │
///       ▼
///  ┌──────────┐
///  │  filter   │  apply the user's selection → FilteredResult
///  └──────────┘
/// ```
///
/// Data flows one way; every stage produces a new table and never mutates
/// its input. Aggregation queries over the filtered table live in
/// [`crate::analysis`].
pub mod filter;
pub mod loader;
pub mod model;
