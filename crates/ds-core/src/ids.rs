//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `TripId` is the trip's position in
//! the pickup-sorted `TripSet`, so `.index()` addresses the trip slice
//! directly.  `ZoneId` is the zone number as it appears in the input files.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of a trip in the pickup-sorted trip set.
    pub struct TripId(u32);
}

typed_id! {
    /// A geographic service zone number.
    pub struct ZoneId(u32);
}

typed_id! {
    /// Sequential schedule number, starting at 1 in creation order.
    pub struct ScheduleId(u32);
}

impl ScheduleId {
    /// Human-readable label, e.g. `SCH-001` for `prefix = "SCH"`, `width = 3`.
    pub fn label(self, prefix: &str, width: usize) -> String {
        format!("{prefix}-{:0width$}", self.0)
    }
}
