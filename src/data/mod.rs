/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   catalog.json (built in or picked by the user)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  two Datasets, their Taxonomies, majors → occupations
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  ViewOptions → visible indices (category, search, sort)
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
