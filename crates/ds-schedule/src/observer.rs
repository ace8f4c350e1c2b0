//! Scheduler observer trait for progress reporting and logging.

use log::{debug, info};

use ds_core::ScheduleId;

use crate::scheduler::Schedule;
use crate::trip::Trip;

/// Callbacks invoked by [`Scheduler::build_schedules_with`][crate::Scheduler::build_schedules_with]
/// as chains are built.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait ScheduleObserver {
    /// A new schedule was opened with `seed` as its first trip.  `label` is
    /// the name the schedule will carry in the reports.
    fn on_schedule_opened(&mut self, _id: ScheduleId, _label: &str, _seed: &Trip) {}

    /// `trip` was appended; `total_km` includes it.
    fn on_trip_added(&mut self, _label: &str, _trip: &Trip, _total_km: f64) {}

    /// The schedule is closed and will not change again.
    fn on_schedule_closed(&mut self, _schedule: &Schedule) {}

    /// Called once after every trip has been assigned.
    fn on_run_end(&mut self, _schedules: usize, _trips: usize) {}
}

/// A [`ScheduleObserver`] that does nothing.
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {}

/// Forwards scheduler events to the `log` facade: one `debug!` line per
/// chain step, one `info!` line per closed schedule and per run.
pub struct LogObserver;

impl ScheduleObserver for LogObserver {
    fn on_schedule_opened(&mut self, _id: ScheduleId, label: &str, seed: &Trip) {
        debug!("{label}: opened with {}", seed.run_number);
    }

    fn on_trip_added(&mut self, label: &str, trip: &Trip, total_km: f64) {
        debug!("{label}: + {} (running {total_km:.3} km)", trip.run_number);
    }

    fn on_schedule_closed(&mut self, schedule: &Schedule) {
        info!(
            "{} closed: {} trips, {:.3} km ({})",
            schedule.label,
            schedule.len(),
            schedule.total_km,
            schedule.close_reason,
        );
    }

    fn on_run_end(&mut self, schedules: usize, trips: usize) {
        info!("generated {schedules} schedules from {trips} trips");
    }
}
