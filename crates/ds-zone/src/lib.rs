//! `ds-zone` — zone adjacency graph, hop-distance search, and zone loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`graph`]  | `ZoneGraph` (sorted adjacency lists), `ZoneGraphBuilder`       |
//! | [`search`] | `distance` — bounded breadth-first hop count                   |
//! | [`loader`] | `load_zones`, `load_zones_csv`, `load_zones_reader`, `ZoneRow` |
//! | [`error`]  | `ZoneError`, `ZoneResult<T>`                                   |
//!
//! # Feature flags
//!
//! | Flag   | Effect                                                         |
//! |--------|----------------------------------------------------------------|
//! | `xlsx` | `load_zones_xlsx`; `load_zones` opens non-CSV files as workbooks |
//!
//! # Ownership
//!
//! A `ZoneGraph` is built once and is read-only afterwards.  Applications
//! that schedule several trip files against the same zone table keep the
//! graph themselves and pass `&ZoneGraph` into each run; nothing in the
//! `ds-*` crates caches or rebuilds it.

pub mod error;
pub mod graph;
pub mod loader;
pub mod search;


pub use error::{ZoneError, ZoneResult};
pub use graph::{ZoneGraph, ZoneGraphBuilder};
pub use loader::{build_graph, load_zones, load_zones_csv, load_zones_reader, ZoneRow};

#[cfg(feature = "xlsx")]
pub use loader::load_zones_xlsx;
pub use search::distance;
