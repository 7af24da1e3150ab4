/// Data layer: season records, loading, and lookup.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<TeamSeasonRecord>
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ TeamRecordStore  │  records, (year, team) index, sorted teams/years
///   └─────────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod store;
