//! Trip records and the pickup-ordered trip set.
//!
//! # Ordering
//!
//! The scheduler seeds every schedule with the earliest unassigned pickup,
//! so the order of the trip set is part of the algorithm's input.  `TripSet`
//! sorts trips by pickup time with a **stable** sort: trips sharing a pickup
//! time keep their input order.  A trip's `TripId` is its position after that
//! sort, and every tie in the scheduler is broken toward the lower `TripId`.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use ds_core::{TimeOfDay, TripId, ZoneId};

// ── Trip ──────────────────────────────────────────────────────────────────────

/// One timed trip between two zones.  Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Operator run number, carried through to the reports unchanged.
    pub run_number:   String,
    pub pickup_zone:  ZoneId,
    pub dropoff_zone: ZoneId,
    pub pickup:       TimeOfDay,
    /// Never earlier than `pickup` (checked by the loader).
    pub dropoff:      TimeOfDay,
    /// Distance travelled, kilometres, non-negative.
    pub km:           f64,
}

impl Trip {
    pub fn new(
        run_number:   impl Into<String>,
        pickup_zone:  ZoneId,
        dropoff_zone: ZoneId,
        pickup:       TimeOfDay,
        dropoff:      TimeOfDay,
        km:           f64,
    ) -> Self {
        Self {
            run_number: run_number.into(),
            pickup_zone,
            dropoff_zone,
            pickup,
            dropoff,
            km,
        }
    }
}

// ── TripSet ───────────────────────────────────────────────────────────────────

/// All trips of one scheduling run, sorted ascending by pickup time.
#[derive(Clone, Debug, Default)]
pub struct TripSet {
    trips: Vec<Trip>,
}

impl TripSet {
    /// Sort `trips` by pickup (stable) and freeze them.
    pub fn new(mut trips: Vec<Trip>) -> Self {
        trips.sort_by_key(|t| t.pickup);
        Self { trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn get(&self, id: TripId) -> Option<&Trip> {
        self.trips.get(id.index())
    }

    /// All trips in pickup order; slice position equals `TripId`.
    pub fn as_slice(&self) -> &[Trip] {
        &self.trips
    }

    /// `(TripId, &Trip)` pairs in pickup order.
    pub fn iter(&self) -> impl Iterator<Item = (TripId, &Trip)> + '_ {
        self.trips
            .iter()
            .enumerate()
            .map(|(i, t)| (TripId(i as u32), t))
    }

    /// Every id in the set, ascending.
    pub fn ids(&self) -> impl Iterator<Item = TripId> + '_ {
        (0..self.trips.len() as u32).map(TripId)
    }
}

impl Index<TripId> for TripSet {
    type Output = Trip;

    #[inline]
    fn index(&self, id: TripId) -> &Trip {
        &self.trips[id.index()]
    }
}
