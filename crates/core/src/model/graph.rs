//! Arc-wrapped immutable taxonomy graph
//!
//! The `TaxonomyGraph` provides a cheap-to-clone, immutable view of the
//! taxonomy topology. The data is wrapped in `Arc`, so cloning only
//! increments a reference counter; once built, no handle can mutate it.

use crate::error::{Result, TaxoscopeError};
use crate::model::{DigraphSource, NodeId};
use petgraph::Direction as PetDirection;
use petgraph::graph::{DiGraph, NodeIndex};
use std::sync::Arc;

/// Immutable directed graph of N concept nodes indexed `0..N-1`
/// (cheap to clone via Arc).
#[derive(Clone, Debug)]
pub struct TaxonomyGraph {
    inner: Arc<DiGraph<(), ()>>,
}

impl TaxonomyGraph {
    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether `id` names a node of this graph
    pub fn contains(&self, id: NodeId) -> bool {
        id < self.inner.node_count()
    }

    /// Out-neighbors of `id` in edge insertion order; empty for an
    /// out-of-range id.
    pub fn out_edges(&self, id: NodeId) -> Vec<NodeId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut out: Vec<NodeId> = self
            .inner
            .neighbors_directed(NodeIndex::new(id), PetDirection::Outgoing)
            .map(|n| n.index())
            .collect();
        // petgraph yields the most recently added edge first; re-reverse to
        // keep the stable insertion order the tie-break contract documents.
        out.reverse();
        out
    }
}

impl DigraphSource for TaxonomyGraph {
    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn out_edges(&self, node: NodeId) -> Vec<NodeId> {
        self.out_edges(node)
    }
}

/// Mutable graph builder, frozen into a [`TaxonomyGraph`] by `build()`.
///
/// Nodes are created up front in id order and never removed, so
/// `NodeIndex::new(id)` addresses node `id` directly. Self-loops, parallel
/// edges, and cycles are all accepted; the searches stay correct on them.
pub struct TaxonomyGraphBuilder {
    topology: DiGraph<(), ()>,
}

impl TaxonomyGraphBuilder {
    /// Create a builder for a graph of `n` nodes and no edges yet
    pub fn with_nodes(n: usize) -> Self {
        let mut topology = DiGraph::with_capacity(n, 0);
        for _ in 0..n {
            topology.add_node(());
        }
        Self { topology }
    }

    /// Add a directed edge `from -> to`; both endpoints must be in range
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        let bound = self.topology.node_count();
        for id in [from, to] {
            if id >= bound {
                return Err(TaxoscopeError::InvalidNode { id, bound });
            }
        }
        self.topology
            .add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    /// Freeze into the immutable, shareable graph
    pub fn build(self) -> TaxonomyGraph {
        TaxonomyGraph {
            inner: Arc::new(self.topology),
        }
    }
}
