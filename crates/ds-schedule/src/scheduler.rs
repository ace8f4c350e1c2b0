//! Greedy trip chaining.
//!
//! # Algorithm
//!
//! ```text
//! unassigned = all trips
//! while unassigned is not empty:
//!   seed    = earliest-pickup unassigned trip          (ties: lowest TripId)
//!   anchor  = seed.pickup
//!   current = seed
//!   loop:
//!     append current, remove from unassigned, total_km += current.km
//!     if total_km >= km_limit - tol:           close (distance cap)
//!     next = earliest-pickup unassigned c with  (ties: lowest TripId)
//!              hop(current.dropoff_zone, c.pickup_zone) <= max_zone_depth
//!              c.pickup  >= current.dropoff + required_gap(hop, zones)
//!              c.dropoff - anchor <= max_hours + tol
//!              total_km + c.km    <= km_limit + tol
//!     if none:                                 close (no candidate)
//!     current = next
//! ```
//!
//! Every inner step removes one trip, so a run takes at most `n` steps and
//! scans at most `n` candidates per step.  The result is greedy and
//! irrevocable: a trip consumed by one schedule is never reconsidered.
//!
//! # Randomness
//!
//! Candidates are scanned in ascending `TripId` order and a snow-affected
//! candidate draws its gap before the time checks, so for a given
//! `GapRng` sequence the output is fully reproducible.  A fresh draw is made
//! for every candidate at every step; the draw that admitted a chosen link
//! is recorded in [`Link::gap_minutes`].

use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashMap;

use ds_core::{DsResult, GapRng, ScheduleId, SchedulerConfig, TimeOfDay, TripId, ZoneId};
use ds_zone::{distance, ZoneGraph};

use crate::gap::GapPolicy;
use crate::observer::{NoopObserver, ScheduleObserver};
use crate::trip::TripSet;

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Why a schedule stopped growing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// The running distance reached the km cap.
    DistanceCap,
    /// No unassigned trip passed every constraint.
    NoCandidate,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseReason::DistanceCap => f.write_str("distance cap reached"),
            CloseReason::NoCandidate => f.write_str("no feasible next trip"),
        }
    }
}

/// How one trip was chained to its predecessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// Hops from the previous dropoff zone to this pickup zone.
    pub hop: u32,
    /// The minimum gap applied when the link was accepted.
    pub gap_minutes: u32,
}

/// One driver work block: a chain of trips in chaining order.
#[derive(Clone, Debug)]
pub struct Schedule {
    pub id:           ScheduleId,
    /// `id` rendered with the configured prefix and width, e.g. `SCH-001`.
    pub label:        String,
    pub trips:        Vec<TripId>,
    /// `links[i]` joins `trips[i]` to `trips[i + 1]`.
    pub links:        Vec<Link>,
    pub total_km:     f64,
    pub close_reason: CloseReason,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Earliest pickup across the schedule's trips.
    pub fn start(&self, trips: &TripSet) -> Option<TimeOfDay> {
        self.trips.iter().map(|&t| trips[t].pickup).min()
    }

    /// Latest dropoff across the schedule's trips.
    pub fn end(&self, trips: &TripSet) -> Option<TimeOfDay> {
        self.trips.iter().map(|&t| trips[t].dropoff).max()
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Builds schedules under one validated [`SchedulerConfig`].
///
/// Holds no per-run state: the zone graph, trip set, and RNG are passed into
/// each call, so one `Scheduler` may serve any number of runs.
#[derive(Clone, Debug)]
pub struct Scheduler {
    config: SchedulerConfig,
    policy: GapPolicy,
}

impl Scheduler {
    /// Validate `config` and build the gap policy from it.
    pub fn new(config: SchedulerConfig) -> DsResult<Self> {
        config.validate()?;
        let policy = GapPolicy::from_config(&config);
        Ok(Self { config, policy })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn policy(&self) -> &GapPolicy {
        &self.policy
    }

    /// Partition `trips` into schedules.  See the module docs for the rules.
    ///
    /// An empty trip set yields no schedules.
    pub fn build_schedules(
        &self,
        trips:     &TripSet,
        graph:     &ZoneGraph,
        snow_mode: bool,
        rng:       &mut dyn GapRng,
    ) -> Vec<Schedule> {
        self.build_schedules_with(trips, graph, snow_mode, rng, &mut NoopObserver)
    }

    /// Like [`build_schedules`](Self::build_schedules), reporting progress to
    /// `observer`.
    pub fn build_schedules_with<O: ScheduleObserver + ?Sized>(
        &self,
        trips:     &TripSet,
        graph:     &ZoneGraph,
        snow_mode: bool,
        rng:       &mut dyn GapRng,
        observer:  &mut O,
    ) -> Vec<Schedule> {
        let mut run = Run {
            cfg: &self.config,
            policy: &self.policy,
            trips,
            graph,
            snow_mode,
            rng,
            hops: FxHashMap::default(),
            unassigned: trips.ids().collect(),
        };

        let mut schedules = Vec::new();
        let mut seq = 0u32;

        while let Some(seed) = run.seed() {
            seq += 1;
            let id = ScheduleId(seq);
            let label = id.label(&self.config.schedule_prefix, self.config.schedule_id_width);
            observer.on_schedule_opened(id, &label, &trips[seed]);

            let schedule = run.chain(id, label, seed, observer);
            observer.on_schedule_closed(&schedule);
            schedules.push(schedule);
        }

        observer.on_run_end(schedules.len(), trips.len());
        schedules
    }
}

// ── Run state ─────────────────────────────────────────────────────────────────

/// Mutable state of one `build_schedules` call.
struct Run<'a> {
    cfg:        &'a SchedulerConfig,
    policy:     &'a GapPolicy,
    trips:      &'a TripSet,
    graph:      &'a ZoneGraph,
    snow_mode:  bool,
    rng:        &'a mut dyn GapRng,
    /// Hop distances already computed this run.
    hops:       FxHashMap<(ZoneId, ZoneId), Option<u32>>,
    unassigned: BTreeSet<TripId>,
}

impl Run<'_> {
    /// Earliest-pickup unassigned trip; ties go to the lowest `TripId`.
    fn seed(&self) -> Option<TripId> {
        self.unassigned
            .iter()
            .copied()
            .min_by_key(|&t| (self.trips[t].pickup, t))
    }

    fn chain<O: ScheduleObserver + ?Sized>(
        &mut self,
        id:       ScheduleId,
        label:    String,
        seed:     TripId,
        observer: &mut O,
    ) -> Schedule {
        let trips = self.trips;
        let anchor = trips[seed].pickup;
        let mut chain = Vec::new();
        let mut links = Vec::new();
        let mut total_km = 0.0;
        let mut current = seed;

        let close_reason = loop {
            chain.push(current);
            self.unassigned.remove(&current);
            total_km += trips[current].km;
            observer.on_trip_added(&label, &trips[current], total_km);

            if total_km >= self.cfg.km_limit - self.cfg.tolerance {
                break CloseReason::DistanceCap;
            }

            match self.next_candidate(current, anchor, total_km) {
                Some((next, link)) => {
                    links.push(link);
                    current = next;
                }
                None => break CloseReason::NoCandidate,
            }
        };

        Schedule {
            id,
            label,
            trips: chain,
            links,
            total_km,
            close_reason,
        }
    }

    /// The feasible extension of `current` with the earliest pickup.
    fn next_candidate(
        &mut self,
        current:  TripId,
        anchor:   TimeOfDay,
        total_km: f64,
    ) -> Option<(TripId, Link)> {
        let (trips, cfg, policy) = (self.trips, self.cfg, self.policy);
        let cur = &trips[current];
        let from = cur.dropoff_zone;
        let km_cap = cfg.km_limit + cfg.tolerance;
        let hours_cap = cfg.max_hours + cfg.tolerance;

        let mut best: Option<(TripId, Link)> = None;
        let candidates: Vec<TripId> = self.unassigned.iter().copied().collect();

        for cand_id in candidates {
            let cand = &trips[cand_id];

            let Some(hop) = self.hop(from, cand.pickup_zone) else { continue };
            if hop > cfg.max_zone_depth {
                continue;
            }

            let gap = policy.required_gap(hop, from, cand.pickup_zone, self.snow_mode, &mut *self.rng);
            if cand.pickup < cur.dropoff.plus_minutes(gap) {
                continue;
            }
            if cand.dropoff.hours_since(anchor) > hours_cap {
                continue;
            }
            if total_km + cand.km > km_cap {
                continue;
            }

            // Strict comparison: on equal pickups the lower TripId, seen first, stays.
            let better = best.is_none_or(|(b, _)| cand.pickup < trips[b].pickup);
            if better {
                best = Some((cand_id, Link { hop, gap_minutes: gap }));
            }
        }

        best
    }

    fn hop(&mut self, from: ZoneId, to: ZoneId) -> Option<u32> {
        let (graph, depth) = (self.graph, self.cfg.max_zone_depth);
        *self
            .hops
            .entry((from, to))
            .or_insert_with(|| distance(graph, from, to, depth))
    }
}
