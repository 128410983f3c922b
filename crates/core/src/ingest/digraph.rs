//! Plain digraph text format: node count, edge count, then one `v w` pair
//! per edge. Tokens are whitespace-separated; line breaks are not
//! significant.

use crate::error::{Result, TaxoscopeError};
use crate::model::{TaxonomyGraph, TaxonomyGraphBuilder};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub fn read_digraph(path: &Path) -> Result<TaxonomyGraph> {
    let file = File::open(path)?;
    parse_digraph(BufReader::new(file))
}

pub fn parse_digraph<R: Read>(mut reader: R) -> Result<TaxonomyGraph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let node_count = next_usize(&mut tokens, "node count")?;
    let edge_count = next_usize(&mut tokens, "edge count")?;

    let mut builder = TaxonomyGraphBuilder::with_nodes(node_count);
    for i in 0..edge_count {
        let v = next_usize(&mut tokens, &format!("tail of edge {i}"))?;
        let w = next_usize(&mut tokens, &format!("head of edge {i}"))?;
        builder.add_edge(v, w)?;
    }

    Ok(builder.build())
}

fn next_usize<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<usize> {
    let token = tokens
        .next()
        .ok_or_else(|| TaxoscopeError::Parse(format!("digraph: missing {what}")))?;
    token
        .parse()
        .map_err(|_| TaxoscopeError::Parse(format!("digraph: invalid {what} {token:?}")))
}
