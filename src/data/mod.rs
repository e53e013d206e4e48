/// Data layer: table type, loading, filtering and column selection.
///
/// Architecture:
/// ```text
///   table text / .csv file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split lines and cells → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  filter spec → predicates → kept rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  column spec → sorted indices → projected rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod select;
