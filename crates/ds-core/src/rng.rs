//! Randomness source for snow-mode gap draws.
//!
//! # Injection strategy
//!
//! Snow-affected links draw their minimum gap uniformly from an inclusive
//! minute range.  The scheduler never touches a global RNG; it pulls every
//! draw through a `&mut dyn GapRng` supplied by the caller.  This means:
//!
//! - Production runs use [`SchedRng::from_entropy`] and get fresh draws.
//! - Reproducible runs use [`SchedRng::new`] with a fixed seed.
//! - Tests implement `GapRng` directly and script the exact draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── GapRng ────────────────────────────────────────────────────────────────────

/// Source of uniformly distributed gap lengths.
pub trait GapRng {
    /// Draw an integer uniformly from `lo..=hi` minutes.
    ///
    /// Callers guarantee `lo <= hi` (checked by `SchedulerConfig::validate`).
    fn draw_minutes(&mut self, lo: u32, hi: u32) -> u32;
}

// ── SchedRng ──────────────────────────────────────────────────────────────────

/// Default [`GapRng`] backed by `SmallRng`.
///
/// Used only in single-threaded contexts: one scheduling run owns one
/// `SchedRng` for its whole duration.
pub struct SchedRng(SmallRng);

impl SchedRng {
    /// Seed deterministically.  The same seed always produces the same draws.
    pub fn new(seed: u64) -> Self {
        SchedRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        SchedRng(SmallRng::from_entropy())
    }
}

impl GapRng for SchedRng {
    #[inline]
    fn draw_minutes(&mut self, lo: u32, hi: u32) -> u32 {
        self.0.gen_range(lo..=hi)
    }
}
