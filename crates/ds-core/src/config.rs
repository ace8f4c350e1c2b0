//! Scheduler configuration.
//!
//! Every constant the scheduling rules depend on lives here so that an
//! application can tune it from a JSON file (feature `serde`) instead of
//! recompiling.  `Default` reproduces the winter service rules.

use std::collections::BTreeSet;

use crate::{DsError, DsResult, ZoneId};

/// Longest gap a table entry may ask for: one full day.
pub const MAX_GAP_MINUTES: u32 = 24 * 60;

/// Zones that switch a link to randomized gaps while snow mode is active.
const DEFAULT_SNOW_ZONES: [u32; 14] = [1, 2, 3, 4, 5, 6, 8, 10, 11, 13, 17, 30, 32, 34];

/// Tunables for one scheduling run.
///
/// Gap tables are indexed by hop distance: `normal_gap_minutes[d]` is the
/// fixed gap for a `d`-hop link and `snow_gap_ranges[d]` the inclusive
/// `[min, max]` draw range when the link is snow-affected.  Both tables must
/// cover every hop up to `max_zone_depth`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchedulerConfig {
    /// Maximum total kilometres per schedule.  Default: 120.0.
    pub km_limit: f64,

    /// Maximum span from first pickup to last dropoff, in hours.  Default: 12.0.
    pub max_hours: f64,

    /// Maximum hop distance between a dropoff zone and the next pickup zone.
    /// Default: 2.
    pub max_zone_depth: u32,

    /// Slack applied to the km and hour caps.  Default: 1e-6.
    pub tolerance: f64,

    /// Fixed minimum gap per hop distance.  Default: `[10, 15, 20]`.
    pub normal_gap_minutes: Vec<u32>,

    /// Inclusive snow-mode gap range per hop distance.
    /// Default: `[[10, 15], [15, 20], [20, 25]]`.
    pub snow_gap_ranges: Vec<[u32; 2]>,

    /// Zones whose links use `snow_gap_ranges` while snow mode is active.
    pub snow_zones: BTreeSet<ZoneId>,

    /// Schedule label prefix.  Default: `"SCH"`.
    pub schedule_prefix: String,

    /// Zero-padded width of the schedule counter.  Default: 3.
    pub schedule_id_width: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            km_limit:           120.0,
            max_hours:          12.0,
            max_zone_depth:     2,
            tolerance:          1e-6,
            normal_gap_minutes: vec![10, 15, 20],
            snow_gap_ranges:    vec![[10, 15], [15, 20], [20, 25]],
            snow_zones:         DEFAULT_SNOW_ZONES.iter().copied().map(ZoneId).collect(),
            schedule_prefix:    "SCH".to_owned(),
            schedule_id_width:  3,
        }
    }
}

impl SchedulerConfig {
    /// Check internal consistency.  Call once before handing the config to a
    /// scheduler; the scheduling loop itself assumes a valid config.
    pub fn validate(&self) -> DsResult<()> {
        if !(self.km_limit > 0.0) {
            return Err(DsError::Config(format!("km_limit must be > 0, got {}", self.km_limit)));
        }
        if !(self.max_hours > 0.0) {
            return Err(DsError::Config(format!("max_hours must be > 0, got {}", self.max_hours)));
        }
        if !(self.tolerance >= 0.0) {
            return Err(DsError::Config(format!("tolerance must be >= 0, got {}", self.tolerance)));
        }

        let needed = self.max_zone_depth as usize + 1;
        if self.normal_gap_minutes.len() < needed {
            return Err(DsError::Config(format!(
                "normal_gap_minutes has {} entries; max_zone_depth {} needs {needed}",
                self.normal_gap_minutes.len(),
                self.max_zone_depth,
            )));
        }
        if self.snow_gap_ranges.len() < needed {
            return Err(DsError::Config(format!(
                "snow_gap_ranges has {} entries; max_zone_depth {} needs {needed}",
                self.snow_gap_ranges.len(),
                self.max_zone_depth,
            )));
        }
        if let Some((hop, m)) = self
            .normal_gap_minutes
            .iter()
            .enumerate()
            .find(|&(_, &m)| m > MAX_GAP_MINUTES)
        {
            return Err(DsError::Config(format!(
                "normal_gap_minutes[{hop}] is {m}; the limit is {MAX_GAP_MINUTES}"
            )));
        }
        if let Some((hop, [_, hi])) = self
            .snow_gap_ranges
            .iter()
            .enumerate()
            .find(|(_, [_, hi])| *hi > MAX_GAP_MINUTES)
        {
            return Err(DsError::Config(format!(
                "snow_gap_ranges[{hop}] upper bound is {hi}; the limit is {MAX_GAP_MINUTES}"
            )));
        }
        if let Some((hop, [lo, hi])) = self
            .snow_gap_ranges
            .iter()
            .enumerate()
            .find(|(_, [lo, hi])| lo > hi)
        {
            return Err(DsError::Config(format!(
                "snow_gap_ranges[{hop}] is inverted: [{lo}, {hi}]"
            )));
        }
        Ok(())
    }

    /// `true` if `zone` is in the snow-sensitive set.
    #[inline]
    pub fn is_snow_zone(&self, zone: ZoneId) -> bool {
        self.snow_zones.contains(&zone)
    }
}
