/// Data layer: trip types, CSV loading, and month/day filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Vec<TripRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month / weekday of start time
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ TripTable │  filtered rows, source order
///   └───────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
