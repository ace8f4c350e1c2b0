//! `ds-schedule` — trips, gap policy, and greedy schedule building.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`trip`]      | `Trip`, `TripSet` (pickup-sorted, indexed by `TripId`)    |
//! | [`loader`]    | `load_trips_csv`, `load_trips_reader`                     |
//! | [`gap`]       | `GapPolicy`, `GapRule`                                    |
//! | [`scheduler`] | `Scheduler`, `Schedule`, `Link`, `CloseReason`            |
//! | [`observer`]  | `ScheduleObserver`, `NoopObserver`, `LogObserver`         |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ds_core::{SchedRng, SchedulerConfig};
//! use ds_schedule::{load_trips_csv, Scheduler};
//! use ds_zone::load_zones_csv;
//!
//! let graph = load_zones_csv(Path::new("zones.csv"))?;
//! let trips = load_trips_csv(Path::new("trips.csv"))?;
//! let scheduler = Scheduler::new(SchedulerConfig::default())?;
//! let schedules = scheduler.build_schedules(&trips, &graph, true, &mut SchedRng::from_entropy());
//! ```

pub mod error;
pub mod gap;
pub mod loader;
pub mod observer;
pub mod scheduler;
pub mod trip;


pub use error::{ScheduleError, ScheduleResult};
pub use gap::{GapPolicy, GapRule};
pub use loader::{load_trips_csv, load_trips_reader};
pub use observer::{LogObserver, NoopObserver, ScheduleObserver};
pub use scheduler::{CloseReason, Link, Schedule, Scheduler};
pub use trip::{Trip, TripSet};
