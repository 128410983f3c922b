pub mod graph;

pub use graph::{TaxonomyGraph, TaxonomyGraphBuilder};

/// Node identifier: an integer in `[0, node_count)`.
pub type NodeId = usize;

/// Read-only view of a directed graph of densely-numbered nodes.
///
/// The searches and the SAP engine are generic over this trait so they can
/// run against any graph provider, not just [`TaxonomyGraph`]. Implementors
/// must return out-edges in a stable order for a fixed graph; deterministic
/// tie-breaking depends on it.
pub trait DigraphSource {
    fn node_count(&self) -> usize;

    /// Out-neighbors of `node`, in edge insertion order.
    /// Returns an empty sequence for an out-of-range id.
    fn out_edges(&self, node: NodeId) -> Vec<NodeId>;
}

// Blanket implementation for references
impl<T: DigraphSource> DigraphSource for &T {
    fn node_count(&self) -> usize {
        (*self).node_count()
    }

    fn out_edges(&self, node: NodeId) -> Vec<NodeId> {
        (*self).out_edges(node)
    }
}
