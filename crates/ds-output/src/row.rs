//! Plain data row types written by report backends.

use ds_core::{TimeOfDay, ZoneId};

/// Column headers of the summary table, in write order.
pub const SUMMARY_HEADERS: [&str; 5] = ["Schedule_ID", "Trip_Count", "Total_KM", "Start_Time", "End_Time"];

/// Column headers of the details table, in write order.
pub const DETAIL_HEADERS: [&str; 10] = [
    "Schedule_ID",
    "Trip Order",
    "Run Number",
    "Pickup Time",
    "Pick Zone",
    "Dropoff Zone",
    "Dropoff Time",
    "Trip KM",
    "Schedule Total KM",
    "Linkage Justification",
];

/// Aggregates for one schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub schedule_id: String,
    pub trip_count:  usize,
    /// Rounded to 3 decimal places.
    pub total_km:    f64,
    /// Earliest pickup in the schedule.
    pub start_time:  TimeOfDay,
    /// Latest dropoff in the schedule.
    pub end_time:    TimeOfDay,
}

/// One trip within a schedule, in chaining order.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub schedule_id:       String,
    /// 1-based position in the schedule.
    pub trip_order:        usize,
    pub run_number:        String,
    pub pickup_time:       TimeOfDay,
    pub pickup_zone:       ZoneId,
    pub dropoff_zone:      ZoneId,
    pub dropoff_time:      TimeOfDay,
    /// Rounded to 3 decimal places.
    pub trip_km:           f64,
    /// Cumulative distance through this trip, rounded to 3 decimal places.
    pub schedule_total_km: f64,
    /// Why this trip could follow the previous one.
    pub justification:     String,
}
