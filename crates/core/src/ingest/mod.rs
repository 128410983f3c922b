//! File ingestion: builds the graph and vocabulary from their on-disk forms.
//!
//! Two inputs describe a taxonomy: a synsets CSV (`id,term1 term2 ...,gloss`)
//! naming each node and a hypernyms CSV (`id,hyper1,hyper2,...`) listing its
//! is-a edges. The plain digraph text format (`V`, `E`, then `E` pairs of
//! `v w`) feeds the node-level CLI harness directly.

pub mod digraph;
pub mod hypernyms;
pub mod synsets;

pub use digraph::read_digraph;
pub use hypernyms::read_hypernyms;
pub use synsets::read_synsets;

use crate::error::Result;
use crate::vocab::Taxonomy;
use std::path::Path;
use tracing::info;

/// Load a complete taxonomy from a synsets file and a hypernyms file.
pub fn load_taxonomy(synsets_path: &Path, hypernyms_path: &Path) -> Result<Taxonomy> {
    let synset_file = synsets::read_synsets(synsets_path)?;
    let graph = hypernyms::read_hypernyms(hypernyms_path, synset_file.count)?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        terms = synset_file.vocabulary.term_count(),
        "taxonomy loaded"
    );

    Ok(Taxonomy::new(synset_file.vocabulary, graph))
}
