//! Breadth-first reachability over a directed graph.
//!
//! Single-source search is the multi-source case with one seed: every seed
//! enters the frontier at distance 0, so a node reachable from several seeds
//! gets the minimum distance over all of them. A node's first-seen distance
//! is final, which is what keeps cycles and self-loops harmless.

use crate::model::{DigraphSource, NodeId};
use std::collections::VecDeque;

/// Shortest distances from a source set, scoped to a single query.
///
/// Dense over the node range; unreached nodes are `None` (infinite
/// distance). Never retained by the engine or shared across calls.
#[derive(Debug)]
pub struct DistanceTable {
    dist: Vec<Option<u32>>,
}

impl DistanceTable {
    /// Distance of `node` from the source set, `None` if unreached
    pub fn distance(&self, node: NodeId) -> Option<u32> {
        self.dist.get(node).copied().flatten()
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Number of nodes covered by the table (the graph's node count)
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}

/// Compute shortest distances from `sources` (treated as simultaneous
/// origins) to every reachable node, following edges in their direction.
///
/// O(V+E); deterministic; no side effects beyond the returned table.
/// Duplicate source ids have no effect. Out-of-range sources must be
/// rejected by the caller; they are skipped here.
pub fn multi_source_distances<G: DigraphSource>(graph: &G, sources: &[NodeId]) -> DistanceTable {
    let n = graph.node_count();
    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut frontier: VecDeque<(NodeId, u32)> = VecDeque::new();

    for &source in sources {
        if source < n && dist[source].is_none() {
            dist[source] = Some(0);
            frontier.push_back((source, 0));
        }
    }

    while let Some((node, d)) = frontier.pop_front() {
        for next in graph.out_edges(node) {
            if dist[next].is_none() {
                dist[next] = Some(d + 1);
                frontier.push_back((next, d + 1));
            }
        }
    }

    DistanceTable { dist }
}
