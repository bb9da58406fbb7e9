/// Data layer: core types, loading, and averaging.
///
/// Architecture:
/// ```text
///  data1.csv … dataN.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse each file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  average  │  strip X axis, element-wise mean → AveragedRun
///   └──────────┘
/// ```
pub mod average;
pub mod error;
pub mod loader;
pub mod model;
