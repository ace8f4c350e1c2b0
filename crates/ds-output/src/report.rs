//! Report derivation from a finished scheduling run.
//!
//! Reports re-derive everything from the trips, the schedules, and the zone
//! graph.  For the justification text the hop distance is recomputed and the
//! gap *rule* is looked up again; a snow link shows its range, not the draw
//! that admitted it.

use ds_zone::{distance, ZoneGraph};
use ds_schedule::{Schedule, Scheduler, TripSet};

use crate::{DetailRow, SummaryRow};

/// One summary row per schedule, in schedule order.
pub fn build_summary(trips: &TripSet, schedules: &[Schedule]) -> Vec<SummaryRow> {
    schedules
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| {
            let km: f64 = s.trips.iter().map(|&t| trips[t].km).sum();
            SummaryRow {
                schedule_id: s.label.clone(),
                trip_count:  s.len(),
                total_km:    round3(km),
                start_time:  s.start(trips).unwrap_or_default(),
                end_time:    s.end(trips).unwrap_or_default(),
            }
        })
        .collect()
}

/// One detail row per trip, grouped by schedule in chaining order.
///
/// `scheduler` supplies the gap tables and depth bound; `snow_mode` must be
/// the flag the schedules were built with.
pub fn build_details(
    trips:     &TripSet,
    schedules: &[Schedule],
    graph:     &ZoneGraph,
    scheduler: &Scheduler,
    snow_mode: bool,
) -> Vec<DetailRow> {
    let policy = scheduler.policy();
    let max_depth = scheduler.config().max_zone_depth;
    let mut rows = Vec::with_capacity(trips.len());

    for s in schedules {
        let mut cum_km = 0.0;
        for (i, &id) in s.trips.iter().enumerate() {
            let trip = &trips[id];
            cum_km += trip.km;

            let justification = match i.checked_sub(1).map(|p| &trips[s.trips[p]]) {
                None => "First trip".to_owned(),
                Some(prev) => {
                    let gap = trip.pickup.whole_minutes_since(prev.dropoff);
                    match distance(graph, prev.dropoff_zone, trip.pickup_zone, max_depth) {
                        Some(hop) => {
                            let rule = policy.rule(hop, prev.dropoff_zone, trip.pickup_zone, snow_mode);
                            format!("{gap} min gap · dist {hop} · {rule}")
                        }
                        None => format!("{gap} min gap · dist unreachable"),
                    }
                }
            };

            rows.push(DetailRow {
                schedule_id:       s.label.clone(),
                trip_order:        i + 1,
                run_number:        trip.run_number.clone(),
                pickup_time:       trip.pickup,
                pickup_zone:       trip.pickup_zone,
                dropoff_zone:      trip.dropoff_zone,
                dropoff_time:      trip.dropoff,
                trip_km:           round3(trip.km),
                schedule_total_km: round3(cum_km),
                justification,
            });
        }
    }

    rows
}

fn round3(x: f64) -> f64 {
    (x * 1_000.0).round() / 1_000.0
}
