//! Shortest-ancestral-path engine.
//!
//! A shortest ancestral path between v and w goes up from v to some common
//! ancestor and up from w to the same ancestor; its length is the sum of the
//! two leg lengths. The engine answers both single-node and node-set forms
//! of the question with exactly two breadth-first searches per query: one
//! seeded by each side. For set queries the searches are multi-source, which
//! gives the same answer as evaluating every pair but in O(V+E).

use crate::error::{Result, TaxoscopeError};
use crate::model::{DigraphSource, NodeId};
use crate::query::model::Ancestral;
use crate::search::bfs::{DistanceTable, multi_source_distances};

/// Query engine over an immutable digraph.
///
/// Holds nothing but the graph handle; every query is a pure function of
/// (graph, inputs), with its distance tables local to the call. Concurrent
/// read-only queries against one engine are therefore safe.
pub struct SapEngine<G> {
    graph: G,
}

impl<G: DigraphSource> SapEngine<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Shortest ancestral path between single nodes `v` and `w`.
    ///
    /// Returns `None` when the two sides share no reachable node. Among
    /// ancestors tied on total distance, the smallest node id wins (the scan
    /// walks ids in ascending order and only improves strictly).
    pub fn query(&self, v: NodeId, w: NodeId) -> Result<Option<Ancestral>> {
        self.check_node(v)?;
        self.check_node(w)?;
        let dist_v = multi_source_distances(&self.graph, &[v]);
        let dist_w = multi_source_distances(&self.graph, &[w]);
        Ok(self.closest_common(&dist_v, &dist_w))
    }

    /// Shortest ancestral path between any node of `set_v` and any node of
    /// `set_w`.
    ///
    /// Seeds one multi-source search per side, so the cost is two searches
    /// regardless of set sizes; the result is identical to taking the
    /// minimum of [`Self::query`] over all pairs. An empty set on either
    /// side is a no-path outcome (`None`), not an error.
    pub fn query_sets(&self, set_v: &[NodeId], set_w: &[NodeId]) -> Result<Option<Ancestral>> {
        for &id in set_v.iter().chain(set_w) {
            self.check_node(id)?;
        }
        if set_v.is_empty() || set_w.is_empty() {
            return Ok(None);
        }
        let dist_v = multi_source_distances(&self.graph, set_v);
        let dist_w = multi_source_distances(&self.graph, set_w);
        Ok(self.closest_common(&dist_v, &dist_w))
    }

    /// Length of the shortest ancestral path between `v` and `w`; `-1` if
    /// no such path
    pub fn length(&self, v: NodeId, w: NodeId) -> Result<i64> {
        Ok(render_length(self.query(v, w)?))
    }

    /// A common ancestor of `v` and `w` participating in a shortest
    /// ancestral path; `-1` if no such path
    pub fn ancestor(&self, v: NodeId, w: NodeId) -> Result<i64> {
        Ok(render_ancestor(self.query(v, w)?))
    }

    /// Set form of [`Self::length`]
    pub fn length_sets(&self, set_v: &[NodeId], set_w: &[NodeId]) -> Result<i64> {
        Ok(render_length(self.query_sets(set_v, set_w)?))
    }

    /// Set form of [`Self::ancestor`]
    pub fn ancestor_sets(&self, set_v: &[NodeId], set_w: &[NodeId]) -> Result<i64> {
        Ok(render_ancestor(self.query_sets(set_v, set_w)?))
    }

    /// Scan all nodes and keep the one reached from both sides with the
    /// smallest combined distance.
    fn closest_common(&self, dist_v: &DistanceTable, dist_w: &DistanceTable) -> Option<Ancestral> {
        let mut best: Option<Ancestral> = None;
        for node in 0..self.graph.node_count() {
            if let (Some(a), Some(b)) = (dist_v.distance(node), dist_w.distance(node)) {
                let total = a + b;
                if best.is_none_or(|cur| total < cur.length) {
                    best = Some(Ancestral {
                        length: total,
                        ancestor: node,
                    });
                }
            }
        }
        best
    }

    fn check_node(&self, id: NodeId) -> Result<()> {
        let bound = self.graph.node_count();
        if id >= bound {
            return Err(TaxoscopeError::InvalidNode { id, bound });
        }
        Ok(())
    }
}

fn render_length(outcome: Option<Ancestral>) -> i64 {
    outcome.map_or(-1, |a| i64::from(a.length))
}

fn render_ancestor(outcome: Option<Ancestral>) -> i64 {
    outcome.map_or(-1, |a| a.ancestor as i64)
}
