pub mod error;
pub mod logging;

pub mod ingest;
pub mod model;
pub mod query;
pub mod search;
pub mod vocab;

pub use error::{Result, TaxoscopeError};
pub use model::{DigraphSource, NodeId, TaxonomyGraph, TaxonomyGraphBuilder};
pub use query::{Ancestral, SapEngine};
pub use vocab::{CommonAncestor, Taxonomy, Vocabulary};
