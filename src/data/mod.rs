/// Data layer: core types, loading, and normalization.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  named columns, rows of nullable string cells
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  per-column [0,1] mapping + numeric detection
///   └───────────┘
/// ```
pub mod loader;
pub mod model;
pub mod normalize;
