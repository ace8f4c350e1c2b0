//! CSV trip loader.
//!
//! # CSV format
//!
//! One row per trip.  Header names follow the dispatch export; extra
//! columns are ignored and every field is whitespace-trimmed.
//!
//! ```csv
//! TTM Number,First Pickup Zone,Last Dropoff Zone,First Pickup Time,Last Dropoff Time,KM
//! R-101,1,1,08:00:00,08:30:00,50
//! R-102,1,2,08:45:00,09:15:00,40.5
//! ```
//!
//! # Failure policy
//!
//! Schedules must partition the complete trip set, so a single bad row fails
//! the whole load instead of being dropped.  The error names the file line.
//! Rejected rows: a missing or empty field, a zone that is not a
//! non-negative integer, a time that is not `HH:MM:SS`, a negative or
//! non-finite `KM`, and a dropoff earlier than its pickup.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ds_core::{TimeOfDay, ZoneId};

use crate::trip::{Trip, TripSet};
use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TripRecord {
    #[serde(rename = "TTM Number")]
    run_number:   String,
    #[serde(rename = "First Pickup Zone")]
    pickup_zone:  String,
    #[serde(rename = "Last Dropoff Zone")]
    dropoff_zone: String,
    #[serde(rename = "First Pickup Time")]
    pickup:       String,
    #[serde(rename = "Last Dropoff Time")]
    dropoff:      String,
    #[serde(rename = "KM")]
    km:           String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and pickup-sort all trips from a CSV file.
pub fn load_trips_csv(path: &Path) -> Result<TripSet, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_trips_reader(file)
}

/// Like [`load_trips_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for uploads held in
/// memory.
pub fn load_trips_reader<R: Read>(reader: R) -> Result<TripSet, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| ScheduleError::Parse(e.to_string()))?
        .clone();

    let mut trips = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let line = record.position().map_or(0, |p| p.line());
        let invalid = |reason: String| ScheduleError::InvalidTrip { line, reason };

        let row: TripRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| invalid(e.to_string()))?;
        trips.push(parse_trip(row).map_err(invalid)?);
    }

    Ok(TripSet::new(trips))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_trip(row: TripRecord) -> Result<Trip, String> {
    if row.run_number.is_empty() {
        return Err("missing TTM Number".to_owned());
    }
    let pickup_zone = parse_zone("First Pickup Zone", &row.pickup_zone)?;
    let dropoff_zone = parse_zone("Last Dropoff Zone", &row.dropoff_zone)?;
    let pickup = TimeOfDay::parse(&row.pickup).map_err(|e| format!("First Pickup Time: {e}"))?;
    let dropoff = TimeOfDay::parse(&row.dropoff).map_err(|e| format!("Last Dropoff Time: {e}"))?;

    let km: f64 = row
        .km
        .parse()
        .map_err(|_| format!("KM: invalid number {:?}", row.km))?;
    if !km.is_finite() || km < 0.0 {
        return Err(format!("KM must be a non-negative number, got {km}"));
    }
    if dropoff < pickup {
        return Err(format!(
            "dropoff {} is earlier than pickup {}",
            dropoff.to_hms_string(),
            pickup.to_hms_string()
        ));
    }

    Ok(Trip::new(row.run_number, pickup_zone, dropoff_zone, pickup, dropoff, km))
}

/// Accept `12` and the spreadsheet-style `12.0`.
fn parse_zone(column: &str, raw: &str) -> Result<ZoneId, String> {
    if let Ok(n) = raw.parse::<u32>() {
        return Ok(ZoneId(n));
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) => {
            Ok(ZoneId(f as u32))
        }
        _ => Err(format!("{column}: invalid zone {raw:?}")),
    }
}
