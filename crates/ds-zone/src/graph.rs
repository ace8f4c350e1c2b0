//! Zone adjacency graph and builder.
//!
//! # Data layout
//!
//! Each zone maps to a sorted, de-duplicated `Vec<ZoneId>` of neighbours.
//! Edges are undirected: the builder always inserts both directions, so
//! `b ∈ neighbors(a)` iff `a ∈ neighbors(b)`.  A zone registered as a
//! primary zone also lists itself, which makes it present in the map even
//! when it has no backups.  Self-entries never change a hop distance; the
//! search treats `start == target` as distance 0 before touching the map.
//!
//! Sorted lists keep breadth-first expansion order stable from run to run,
//! which makes traces and test expectations reproducible.

use rustc_hash::{FxHashMap, FxHashSet};

use ds_core::ZoneId;

// ── ZoneGraph ─────────────────────────────────────────────────────────────────

/// Undirected zone adjacency.  Do not construct directly; use
/// [`ZoneGraphBuilder`] or [`build_graph`](crate::build_graph).
#[derive(Clone, Debug, Default)]
pub struct ZoneGraph {
    neighbors: FxHashMap<ZoneId, Vec<ZoneId>>,
}

impl ZoneGraph {
    /// A graph with no zones.  Every distance query between distinct zones
    /// returns `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn zone_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of undirected links between distinct zones.
    pub fn link_count(&self) -> usize {
        let directed: usize = self
            .neighbors
            .iter()
            .map(|(z, nbs)| nbs.iter().filter(|n| *n != z).count())
            .sum();
        directed / 2
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub fn contains(&self, zone: ZoneId) -> bool {
        self.neighbors.contains_key(&zone)
    }

    /// Neighbours of `zone` in ascending order (including `zone` itself if it
    /// was registered as a primary).  Empty for unknown zones.
    #[inline]
    pub fn neighbors(&self, zone: ZoneId) -> &[ZoneId] {
        self.neighbors.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All known zones in ascending order.
    pub fn zones(&self) -> Vec<ZoneId> {
        let mut zones: Vec<ZoneId> = self.neighbors.keys().copied().collect();
        zones.sort_unstable();
        zones
    }
}

// ── ZoneGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`ZoneGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ds_core::ZoneId;
/// use ds_zone::{distance, ZoneGraphBuilder};
///
/// let mut b = ZoneGraphBuilder::new();
/// b.add_zone(ZoneId(1));
/// b.add_link(ZoneId(1), ZoneId(2));
/// let g = b.build();
/// assert_eq!(distance(&g, ZoneId(2), ZoneId(1), 2), Some(1));
/// ```
#[derive(Default)]
pub struct ZoneGraphBuilder {
    adj: FxHashMap<ZoneId, FxHashSet<ZoneId>>,
}

impl ZoneGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `zone` as its own neighbour.
    pub fn add_zone(&mut self, zone: ZoneId) {
        self.adj.entry(zone).or_default().insert(zone);
    }

    /// Add an undirected link `a ↔ b`.  Repeated links are collapsed.
    pub fn add_link(&mut self, a: ZoneId, b: ZoneId) {
        self.adj.entry(a).or_default().insert(b);
        self.adj.entry(b).or_default().insert(a);
    }

    pub fn zone_count(&self) -> usize {
        self.adj.len()
    }

    /// Consume the builder and freeze the adjacency into sorted lists.
    pub fn build(self) -> ZoneGraph {
        let neighbors = self
            .adj
            .into_iter()
            .map(|(zone, set)| {
                let mut list: Vec<ZoneId> = set.into_iter().collect();
                list.sort_unstable();
                (zone, list)
            })
            .collect();
        ZoneGraph { neighbors }
    }
}
