//! Bounded hop-distance search.
//!
//! Breadth-first from `start`.  A zone at depth `d` is expanded only while
//! `d < max_depth`, and the search returns the moment `target` is first
//! discovered as a neighbour, so the answer is the minimum hop count.
//! Each zone enters the visited set once; the graph is undirected and full
//! of cycles.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use ds_core::ZoneId;

use crate::ZoneGraph;

/// Minimum number of links from `start` to `target`, or `None` if the
/// target is not reachable within `max_depth` hops.
///
/// `start == target` is always `Some(0)`, even for zones absent from the
/// graph.
pub fn distance(graph: &ZoneGraph, start: ZoneId, target: ZoneId, max_depth: u32) -> Option<u32> {
    if start == target {
        return Some(0);
    }

    let mut visited: FxHashSet<ZoneId> = FxHashSet::default();
    visited.insert(start);
    let mut queue: VecDeque<(ZoneId, u32)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((zone, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for &next in graph.neighbors(zone) {
            if !visited.insert(next) {
                continue;
            }
            let next_depth = depth + 1;
            if next == target {
                return Some(next_depth);
            }
            queue.push_back((next, next_depth));
        }
    }

    None
}
