//! Synsets CSV parser: `id,term1 term2 ...,gloss` per line.

use crate::error::{Result, TaxoscopeError};
use crate::model::NodeId;
use crate::vocab::Vocabulary;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parsed synsets file: the node count and the term mapping it defines.
#[derive(Debug)]
pub struct SynsetFile {
    /// Number of synsets listed; the taxonomy graph gets this many nodes
    pub count: usize,
    pub vocabulary: Vocabulary,
}

pub fn read_synsets(path: &Path) -> Result<SynsetFile> {
    let file = File::open(path)?;
    parse_synsets(BufReader::new(file))
}

pub fn parse_synsets<R: BufRead>(reader: R) -> Result<SynsetFile> {
    let mut vocabulary = Vocabulary::new();
    let mut count = 0usize;
    let mut max_id: Option<(NodeId, usize)> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // id, space-separated terms, gloss; the gloss is not indexed
        let mut fields = line.splitn(3, ',');
        let id_field = fields.next().unwrap_or("");
        let terms_field = fields
            .next()
            .ok_or_else(|| parse_err(lineno, "missing terms field"))?;

        let id: NodeId = id_field
            .trim()
            .parse()
            .map_err(|_| parse_err(lineno, &format!("invalid synset id {id_field:?}")))?;

        if max_id.is_none_or(|(m, _)| id > m) {
            max_id = Some((id, lineno));
        }

        for term in terms_field.split_whitespace() {
            vocabulary.insert(term, id);
        }
        count += 1;
    }

    // Ids must be dense in 0..count; a sparse id would otherwise surface
    // much later as an out-of-range node on the first query naming it
    if let Some((id, lineno)) = max_id {
        if id >= count {
            return Err(parse_err(
                lineno,
                &format!("synset id {id} out of range (file lists {count} synsets)"),
            ));
        }
    }

    Ok(SynsetFile { count, vocabulary })
}

fn parse_err(lineno: usize, msg: &str) -> TaxoscopeError {
    TaxoscopeError::Parse(format!("synsets line {}: {}", lineno + 1, msg))
}
