//! Single-source shortest paths over graphs whose edges all cost one step.
//!
//! The graph is never materialized: callers hand over the node set and a function listing the
//! admissible neighbours of a node, which lets the same solver walk a height map backwards or a
//! `petgraph` tunnel network forwards.

use std::{collections::BTreeSet, hash::Hash};

use rustc_hash::FxHashMap;

/// Distance recorded for nodes the source cannot reach.
pub const INFINITY: u64 = u64::MAX;

/// Distances from a fixed source, frozen once [`shortest_paths`] returns.
#[derive(Debug, Clone)]
pub struct DistanceMap<N> {
    source: N,
    distances: FxHashMap<N, u64>,
    previous: FxHashMap<N, N>,
}

impl<N: Copy + Eq + Hash> DistanceMap<N> {
    pub fn source(&self) -> N {
        self.source
    }

    /// Distance to `node`, [`INFINITY`] if it is unreachable or unknown.
    pub fn distance(&self, node: N) -> u64 {
        self.distances.get(&node).copied().unwrap_or(INFINITY)
    }

    /// Like [`DistanceMap::distance`] but `None` for unreachable nodes.
    pub fn get(&self, node: N) -> Option<u64> {
        Some(self.distance(node)).filter(|&distance| distance != INFINITY)
    }

    pub fn reachable(&self) -> impl Iterator<Item = (N, u64)> + '_ {
        self.distances
            .iter()
            .filter(|&(_, &distance)| distance != INFINITY)
            .map(|(&node, &distance)| (node, distance))
    }

    /// One shortest path from the source to `target`, both ends included.
    pub fn path_to(&self, target: N) -> Option<Vec<N>> {
        self.get(target)?;
        let mut path = vec![target];
        let mut node = target;
        while let Some(&prev) = self.previous.get(&node) {
            path.push(prev);
            node = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra with unit edge weights.
///
/// Every node in `nodes` starts at [`INFINITY`] except `source`. The frontier is ordered by
/// `(distance, node)` so the extracted node always has a minimal distance. Neighbours outside of
/// `nodes` are ignored.
pub fn shortest_paths<N, I, F, A>(nodes: I, source: N, mut neighbours: F) -> DistanceMap<N>
where
    N: Copy + Ord + Hash,
    I: IntoIterator<Item = N>,
    F: FnMut(N) -> A,
    A: IntoIterator<Item = N>,
{
    let mut distances = FxHashMap::default();
    let mut frontier = BTreeSet::new();
    for node in nodes {
        distances.insert(node, INFINITY);
        frontier.insert((INFINITY, node));
    }
    frontier.remove(&(INFINITY, source));
    frontier.insert((0, source));
    distances.insert(source, 0);

    let mut previous = FxHashMap::default();
    while let Some((distance, node)) = frontier.pop_first() {
        if distance == INFINITY {
            // The rest of the frontier is disconnected from the source.
            break;
        }

        let tentative = distance + 1;
        for neighbour in neighbours(node) {
            let Some(current) = distances.get_mut(&neighbour) else {
                continue;
            };
            if tentative < *current && frontier.remove(&(*current, neighbour)) {
                *current = tentative;
                frontier.insert((tentative, neighbour));
                previous.insert(neighbour, node);
            }
        }
    }

    DistanceMap {
        source,
        distances,
        previous,
    }
}
