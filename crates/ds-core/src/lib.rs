//! `ds-core` — foundational types for the driver schedule builder.
//!
//! This crate is a dependency of every other `ds-*` crate.  It intentionally
//! has no `ds-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TripId`, `ZoneId`, `ScheduleId`                      |
//! | [`time`]        | `TimeOfDay`                                           |
//! | [`rng`]         | `GapRng` trait, `SchedRng`                            |
//! | [`config`]      | `SchedulerConfig`                                     |
//! | [`error`]       | `DsError`, `DsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SchedulerConfig` from JSON.              |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SchedulerConfig;
pub use error::{DsError, DsResult};
pub use ids::{ScheduleId, TripId, ZoneId};
pub use rng::{GapRng, SchedRng};
pub use time::TimeOfDay;
