//! Vocabulary mapping: human-readable terms to node-id sets and back.
//!
//! A term may name several nodes (lexical ambiguity is expected), and a node
//! usually carries several terms. Lookups that miss the vocabulary fail at
//! this layer; the query engine below it only ever sees validated node ids.

pub mod taxonomy;

pub use taxonomy::{CommonAncestor, Taxonomy};

use crate::error::{Result, TaxoscopeError};
use crate::model::NodeId;
use std::collections::HashMap;

/// Bidirectional term <-> node-id mapping.
#[derive(Debug, Default)]
pub struct Vocabulary {
    term_to_nodes: HashMap<String, Vec<NodeId>>,
    node_to_terms: HashMap<NodeId, Vec<String>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `term` names node `id`
    pub fn insert(&mut self, term: &str, id: NodeId) {
        self.term_to_nodes
            .entry(term.to_string())
            .or_default()
            .push(id);
        self.node_to_terms
            .entry(id)
            .or_default()
            .push(term.to_string());
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.term_to_nodes.contains_key(term)
    }

    /// All distinct terms (iteration order is unspecified)
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_to_nodes.keys().map(String::as_str)
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.term_to_nodes.len()
    }

    /// Node ids named by `term`
    pub fn node_ids(&self, term: &str) -> Result<&[NodeId]> {
        self.term_to_nodes
            .get(term)
            .map(Vec::as_slice)
            .ok_or_else(|| TaxoscopeError::UnknownTerm(term.to_string()))
    }

    /// Render node `id` as its terms joined by spaces; `None` if no term
    /// names it
    pub fn label(&self, id: NodeId) -> Option<String> {
        self.node_to_terms.get(&id).map(|terms| terms.join(" "))
    }
}
