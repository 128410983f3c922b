//! Term-level facade over the SAP engine.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{NodeId, TaxonomyGraph};
use crate::query::SapEngine;
use crate::vocab::Vocabulary;

/// Common ancestor of two terms, rendered for human consumption.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommonAncestor {
    /// Node id of the ancestor
    pub id: NodeId,
    /// Space-joined terms naming the ancestor node
    pub label: String,
    /// Length of the shortest ancestral path through it
    pub length: u32,
}

/// A taxonomy: vocabulary plus graph plus the engine that queries it.
///
/// This is the layer callers with terms rather than node ids talk to. It
/// validates terms before translating them to node sets, so the engine's
/// invalid-node failures signal a bug here rather than bad user input.
pub struct Taxonomy {
    vocab: Vocabulary,
    engine: SapEngine<TaxonomyGraph>,
}

impl Taxonomy {
    pub fn new(vocab: Vocabulary, graph: TaxonomyGraph) -> Self {
        Self {
            vocab,
            engine: SapEngine::new(graph),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn graph(&self) -> &TaxonomyGraph {
        self.engine.graph()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocab.contains_term(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vocab.terms()
    }

    /// Semantic distance between two terms: the shortest ancestral path
    /// between any node named by `term_a` and any named by `term_b`;
    /// `-1` if the terms share no reachable ancestor
    pub fn distance(&self, term_a: &str, term_b: &str) -> Result<i64> {
        let set_a = self.vocab.node_ids(term_a)?;
        let set_b = self.vocab.node_ids(term_b)?;
        self.engine.length_sets(set_a, set_b)
    }

    /// The common ancestor participating in a shortest ancestral path
    /// between the two terms, with its label; `None` if no such path
    pub fn common_ancestor(&self, term_a: &str, term_b: &str) -> Result<Option<CommonAncestor>> {
        let set_a = self.vocab.node_ids(term_a)?;
        let set_b = self.vocab.node_ids(term_b)?;
        let outcome = self.engine.query_sets(set_a, set_b)?;
        Ok(outcome.map(|a| CommonAncestor {
            id: a.ancestor,
            label: self.vocab.label(a.ancestor).unwrap_or_default(),
            length: a.length,
        }))
    }
}
