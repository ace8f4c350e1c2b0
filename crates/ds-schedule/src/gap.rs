//! Minimum-gap policy between consecutive trips.
//!
//! A link from one trip's dropoff zone `a` to the next trip's pickup zone
//! `b`, `d` hops apart, needs a minimum idle gap before the pickup:
//!
//! ```text
//! snow_affected = snow_mode && (a ∈ snow_zones || b ∈ snow_zones)
//! gap           = snow_affected ? uniform(snow_gap_ranges[d])   // inclusive
//!                               : normal_gap_minutes[d]
//! ```
//!
//! Snow draws consume the caller's [`GapRng`], so [`GapPolicy::required_gap`]
//! is not idempotent.  Anything that needs to describe a link after the fact
//! (reports) uses [`GapPolicy::rule`], which returns the range without
//! drawing.

use std::collections::BTreeSet;
use std::fmt;

use ds_core::{GapRng, SchedulerConfig, ZoneId};

// ── GapRule ───────────────────────────────────────────────────────────────────

/// The gap rule that applies to one link.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GapRule {
    /// Deterministic gap, minutes.
    Fixed(u32),
    /// Snow-affected: a fresh uniform draw from `min..=max` minutes.
    Snow { min: u32, max: u32 },
}

impl GapRule {
    /// Smallest gap the rule can produce.
    pub fn min_minutes(self) -> u32 {
        match self {
            GapRule::Fixed(m) => m,
            GapRule::Snow { min, .. } => min,
        }
    }

    pub fn is_snow(self) -> bool {
        matches!(self, GapRule::Snow { .. })
    }
}

impl fmt::Display for GapRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapRule::Fixed(m) => write!(f, "{m} min"),
            GapRule::Snow { min, max } => write!(f, "{min}–{max} min (snow)"),
        }
    }
}

// ── GapPolicy ─────────────────────────────────────────────────────────────────

/// Gap tables and snow-sensitive zones, copied out of a validated
/// [`SchedulerConfig`].
#[derive(Clone, Debug)]
pub struct GapPolicy {
    normal_gap_minutes: Vec<u32>,
    snow_gap_ranges:    Vec<[u32; 2]>,
    snow_zones:         BTreeSet<ZoneId>,
}

impl GapPolicy {
    /// Build from a config.  The config should already have passed
    /// `validate()`; otherwise lookups past the end of a table panic.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            normal_gap_minutes: config.normal_gap_minutes.clone(),
            snow_gap_ranges:    config.snow_gap_ranges.clone(),
            snow_zones:         config.snow_zones.clone(),
        }
    }

    /// `true` if snow mode applies to a link between `a` and `b`.
    #[inline]
    pub fn is_snow_affected(&self, a: ZoneId, b: ZoneId, snow_mode: bool) -> bool {
        snow_mode && (self.snow_zones.contains(&a) || self.snow_zones.contains(&b))
    }

    /// The rule for a `hop`-distance link from `a` to `b`, without drawing.
    ///
    /// # Panics
    ///
    /// Panics if `hop` exceeds the configured gap tables.  The scheduler
    /// never asks for a hop beyond `max_zone_depth`.
    pub fn rule(&self, hop: u32, a: ZoneId, b: ZoneId, snow_mode: bool) -> GapRule {
        let d = hop as usize;
        if self.is_snow_affected(a, b, snow_mode) {
            let [min, max] = self.snow_gap_ranges[d];
            GapRule::Snow { min, max }
        } else {
            GapRule::Fixed(self.normal_gap_minutes[d])
        }
    }

    /// Minimum gap in minutes for a `hop`-distance link from `a` to `b`.
    ///
    /// Draws from `rng` only when the link is snow-affected.
    pub fn required_gap(
        &self,
        hop:       u32,
        a:         ZoneId,
        b:         ZoneId,
        snow_mode: bool,
        rng:       &mut dyn GapRng,
    ) -> u32 {
        match self.rule(hop, a, b, snow_mode) {
            GapRule::Fixed(m) => m,
            GapRule::Snow { min, max } => rng.draw_minutes(min, max),
        }
    }
}

impl Default for GapPolicy {
    fn default() -> Self {
        Self::from_config(&SchedulerConfig::default())
    }
}
