use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// Outcome of a shortest-ancestral-path query: the total path length and
/// the common ancestor that achieves it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ancestral {
    /// Length of the shortest ancestral path
    pub length: u32,
    /// Common ancestor participating in that path
    pub ancestor: NodeId,
}
