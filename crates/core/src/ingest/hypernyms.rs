//! Hypernyms CSV parser: `id,hyper1,hyper2,...` per line, one edge per
//! listed hypernym. A line with no hypernyms (a root) is valid.

use crate::error::{Result, TaxoscopeError};
use crate::model::{NodeId, TaxonomyGraph, TaxonomyGraphBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn read_hypernyms(path: &Path, node_count: usize) -> Result<TaxonomyGraph> {
    let file = File::open(path)?;
    parse_hypernyms(BufReader::new(file), node_count)
}

pub fn parse_hypernyms<R: BufRead>(reader: R, node_count: usize) -> Result<TaxonomyGraph> {
    let mut builder = TaxonomyGraphBuilder::with_nodes(node_count);

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let id_field = fields.next().unwrap_or("");
        let id = parse_id(id_field, node_count, lineno)?;

        for hypernym_field in fields {
            let hypernym = parse_id(hypernym_field, node_count, lineno)?;
            // parse_id already bounds both endpoints
            builder.add_edge(id, hypernym)?;
        }
    }

    Ok(builder.build())
}

fn parse_id(field: &str, node_count: usize, lineno: usize) -> Result<NodeId> {
    let id: NodeId = field
        .trim()
        .parse()
        .map_err(|_| parse_err(lineno, &format!("invalid synset id {field:?}")))?;
    if id >= node_count {
        return Err(parse_err(
            lineno,
            &format!("synset id {id} out of range (expected {node_count} synsets)"),
        ));
    }
    Ok(id)
}

fn parse_err(lineno: usize, msg: &str) -> TaxoscopeError {
    TaxoscopeError::Parse(format!("hypernyms line {}: {}", lineno + 1, msg))
}
