use thiserror::Error;

use crate::model::NodeId;

#[derive(Error, Debug)]
pub enum TaxoscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error: {0}")]
    Parse(String),
    #[error("node id {id} out of range (graph has {bound} nodes)")]
    InvalidNode { id: NodeId, bound: usize },
    #[error("unknown term: {0}")]
    UnknownTerm(String),
}

pub type Result<T> = std::result::Result<T, TaxoscopeError>;
