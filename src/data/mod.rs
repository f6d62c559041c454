/// Data layer: parsing, column extraction, statistics and filtering.
///
/// Architecture:
/// ```text
///  file text / built-in sample
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  preamble + header + string rows → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ extract   │  two columns → Vec<Point>, non-numeric rows dropped
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  inclusive x window
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  means, σ, r, OLS regression → Statistics
///   └──────────┘
/// ```

pub mod export;
pub mod extract;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
pub mod samples;
pub mod stats;
