/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read rows → RawRecord
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  coerce text → Record, build Dataset
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  workout-type selector → matching records
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  top-N calories, age buckets, difficulty counts
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
