//! Time-of-day model.
//!
//! # Design
//!
//! Trip timestamps carry no date: the upstream export writes `HH:MM:SS`
//! clock times for a single service day.  `TimeOfDay` stores them as whole
//! seconds since midnight:
//!
//!   secs = hours * 3600 + minutes * 60 + seconds
//!
//! Using an integer second count means all gap arithmetic is exact (no
//! floating-point drift) and comparisons are O(1).  Only the 12-hour duration
//! cap converts to fractional hours, and it does so with an explicit
//! tolerance in the scheduler.

use std::fmt;

use crate::{DsError, DsResult};

/// A clock time within one service day, in seconds since midnight.
///
/// `plus_minutes` may step past 24:00; the value is kept unwrapped so that
/// "earliest allowed pickup" comparisons stay monotone late in the day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimeOfDay(pub u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from clock components.  No range check; use [`parse`](Self::parse)
    /// for untrusted input.
    #[inline]
    pub const fn hms(hours: u32, minutes: u32, seconds: u32) -> TimeOfDay {
        TimeOfDay(hours * 3_600 + minutes * 60 + seconds)
    }

    /// Parse a `HH:MM:SS` string.  Surrounding whitespace is ignored; single
    /// digit hours (`8:05:00`) are accepted.
    pub fn parse(s: &str) -> DsResult<TimeOfDay> {
        let raw = s.trim();
        let invalid = || DsError::Parse(format!("invalid time {raw:?}: expected HH:MM:SS"));

        let mut parts = raw.split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let field = |p: &str, max: u32| -> DsResult<u32> {
            if p.is_empty() || p.len() > 2 || !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let v: u32 = p.parse().map_err(|_| invalid())?;
            if v > max { Err(invalid()) } else { Ok(v) }
        };

        Ok(TimeOfDay::hms(field(h, 23)?, field(m, 59)?, field(sec, 59)?))
    }

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    /// The time `minutes` later, saturating at `u32::MAX` seconds.
    #[inline]
    pub fn plus_minutes(self, minutes: u32) -> TimeOfDay {
        TimeOfDay(self.0.saturating_add(minutes.saturating_mul(60)))
    }

    /// Signed seconds from `earlier` to `self` (negative if `self` is earlier).
    #[inline]
    pub fn secs_since(self, earlier: TimeOfDay) -> i64 {
        self.0 as i64 - earlier.0 as i64
    }

    /// Signed fractional hours from `earlier` to `self`.
    #[inline]
    pub fn hours_since(self, earlier: TimeOfDay) -> f64 {
        self.secs_since(earlier) as f64 / 3_600.0
    }

    /// Whole minutes from `earlier` to `self`, truncated toward zero.
    #[inline]
    pub fn whole_minutes_since(self, earlier: TimeOfDay) -> i64 {
        self.secs_since(earlier) / 60
    }

    /// `HH:MM:SS` rendering (the input format).
    pub fn to_hms_string(self) -> String {
        let (h, m, s) = self.components();
        format!("{h:02}:{m:02}:{s:02}")
    }

    fn components(self) -> (u32, u32, u32) {
        (self.0 / 3_600, (self.0 % 3_600) / 60, self.0 % 60)
    }
}

/// Report format: `HH:MM`.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, _) = self.components();
        write!(f, "{h:02}:{m:02}")
    }
}
